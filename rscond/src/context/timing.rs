use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};

use crate::{interp::resolve, CondFunc, CondValue};

/// Outcome of running a deferred computation under a stopwatch.
#[derive(Debug, Clone)]
pub struct TimedCall {
    name: String,
    started: DateTime<Utc>,
    elapsed: Duration,
    result: CondValue,
}

impl TimedCall {
    pub(crate) fn run(func: &CondFunc) -> TimedCall {
        let started = Utc::now();
        let clock = Instant::now();
        let result = resolve(CondValue::Func(func.clone()));
        let elapsed = clock.elapsed();

        TimedCall {
            name: func.name().to_owned(),
            started,
            elapsed,
            result,
        }
    }

    pub fn name<'a>(&'a self) -> &'a str {
        &self.name
    }

    pub fn started(&self) -> DateTime<Utc> {
        self.started
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn result<'a>(&'a self) -> &'a CondValue {
        &self.result
    }

    pub fn into_result(self) -> CondValue {
        self.result
    }

    /// The report line, `[name] runtime: 1.2ms` followed by a newline.
    pub fn line(&self) -> String {
        format!("[{}] runtime: {:?}\n", self.name, self.elapsed)
    }
}
