pub mod cashflowmatrix;
