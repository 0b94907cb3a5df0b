use super::{CaseResult, Evaluator, RunOutput, TestReport, run_output_for};
use crate::model::Exercise;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Evaluador de la demo: cada caso y el veredicto final pasan con
/// probabilidad `pass_rate`, en tiradas independientes.
#[derive(Debug, Clone)]
pub struct SimulatedEvaluator {
    rng: SmallRng,
    pass_rate: f64,
}

impl SimulatedEvaluator {
    pub fn new(pass_rate: f64, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(entropy_seed);
        log::debug!("evaluador simulado (p = {pass_rate}, seed = {seed})");
        Self {
            rng: SmallRng::seed_from_u64(seed),
            pass_rate: pass_rate.clamp(0.0, 1.0),
        }
    }
}

impl Evaluator for SimulatedEvaluator {
    fn run(&mut self, exercise: &Exercise, _code: &str) -> RunOutput {
        run_output_for(exercise)
    }

    fn test(&mut self, exercise: &Exercise, _code: &str) -> TestReport {
        let mut cases = Vec::with_capacity(exercise.test_cases.len());
        for (i, tc) in exercise.test_cases.iter().enumerate() {
            cases.push(CaseResult {
                index: i + 1,
                description: tc.description.clone(),
                expected: tc.expected.clone(),
                passed: self.rng.random_bool(self.pass_rate),
            });
        }
        let all_passed = self.rng.random_bool(self.pass_rate);
        TestReport { cases, all_passed }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn entropy_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5eed)
}

#[cfg(target_arch = "wasm32")]
fn entropy_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}
