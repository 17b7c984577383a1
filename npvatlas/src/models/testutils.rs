use crate::math::randomnumbers::RandomNumberGenerator;
use crate::utils::errors::Result;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Normal {
        mean: f64,
        std_dev: f64,
        size: usize,
    },
    UniformInt {
        low: i64,
        high: i64,
        size: usize,
    },
}

impl DrawCall {
    pub fn normal(mean: f64, std_dev: f64, size: usize) -> Self {
        DrawCall::Normal {
            mean,
            std_dev,
            size,
        }
    }

    pub fn uniform(low: i64, high: i64, size: usize) -> Self {
        DrawCall::UniformInt { low, high, size }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformPick {
    Low,
    High,
}

/// Deterministic generator: normals return their mean, integers one end of
/// their range. Every call is logged.
pub struct RecordingDraws {
    pub calls: Vec<DrawCall>,
    pick: UniformPick,
}

impl RecordingDraws {
    pub fn new(pick: UniformPick) -> Self {
        Self {
            calls: Vec::new(),
            pick,
        }
    }
}

impl RandomNumberGenerator for RecordingDraws {
    fn seed(&self) -> u64 {
        0
    }

    fn set_seed(&mut self, _seed: u64) {
        self.calls.clear();
    }

    fn gen_normal(&mut self, mean: f64, std_dev: f64, size: usize) -> Result<Vec<f64>> {
        self.calls.push(DrawCall::normal(mean, std_dev, size));
        Ok(vec![mean; size])
    }

    fn gen_uniform_int(&mut self, low: i64, high: i64, size: usize) -> Result<Vec<i64>> {
        self.calls.push(DrawCall::uniform(low, high, size));
        let value = match self.pick {
            UniformPick::Low => low,
            UniformPick::High => high - 1,
        };
        Ok(vec![value; size])
    }
}
