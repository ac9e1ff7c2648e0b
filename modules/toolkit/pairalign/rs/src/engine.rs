use eyre::Result;
use rayon::prelude::*;
use rayon::ThreadPool;

use crate::job::{Job, Summary};

/// Runs independent alignment jobs in parallel. Results are returned in job order.
#[derive(Default)]
pub struct PairAlign {
    thread_pool: Option<ThreadPool>,
}

impl PairAlign {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run jobs inside the given pool instead of the global rayon pool.
    pub fn set_thread_pool(mut self, pool: ThreadPool) -> Self {
        self.thread_pool = Some(pool);
        self
    }

    pub fn run(&mut self, jobs: &[Job]) -> Vec<Result<Summary>> {
        match self.thread_pool.take() {
            Some(pool) => {
                let result = pool.install(|| self._run(jobs));
                self.thread_pool = Some(pool);
                result
            }
            None => self._run(jobs),
        }
    }

    fn _run(&self, jobs: &[Job]) -> Vec<Result<Summary>> {
        let results = jobs
            .par_iter()
            .map(|job| {
                let result = job.run();
                if let Err(err) = &result {
                    log::error!("Alignment job for {} failed: {:?}", job.input().display(), err);
                }
                result
            })
            .collect::<Vec<_>>();

        let failed = results.iter().filter(|x| x.is_err()).count();
        log::info!(
            "Finished {} alignment job(s), {} failed",
            results.len(),
            failed
        );
        results
    }
}
