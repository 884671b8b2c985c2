//! Output lines and the throughput figures derived from a fall time

use crate::benchmark::refine::RunRecord;

/// People that have to get through per unit time so the whole population
/// makes it within one fall
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throughput {
    pub per_second: f64,
    pub per_minute: f64,
}

impl Throughput {
    pub fn new(population: u64, fall_time: f64) -> Self {
        let population = population as f64;
        Self {
            per_second: population / fall_time,
            per_minute: population / (fall_time / 60.0),
        }
    }
}

/// Line printed after every run
pub fn progress_line(record: &RunRecord) -> String {
    let time = record.result.fall_time;
    format!(
        "step:{}s; result time: {}s, or {}mins >>> [processing time:{}s]",
        record.step,
        time,
        time / 60.0,
        record.result.wall_clock
    )
}

/// Final line of the program
pub fn summary_line(throughput: &Throughput) -> String {
    format!(
        "end result: required average of {} people per second, or {} people per minute",
        throughput.per_second, throughput.per_minute
    )
}
