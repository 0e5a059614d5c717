// src/solver/race.rs

use log::debug;
use std::sync::mpsc;
use std::thread;

use crate::core::cancellation_token::CancellationToken;
use crate::core::random_source::RandomSource;

/// Runs `attempt` in a pool of workers until one of them produces a value;
/// the first result wins and the rest are cancelled.
///
/// Each worker owns its random source and loops: check the token, run one
/// attempt, publish on success. The result channel holds a single slot and
/// publication is non-blocking, so losing workers that race past the
/// cancellation check simply have their results dropped.
pub fn race<T, F>(num_workers: usize, attempt: F) -> T
where
    T: Send,
    F: Fn(usize, &mut RandomSource) -> Option<T> + Sync,
{
    assert!(num_workers > 0, "race needs at least one worker");
    let token = CancellationToken::new();
    let (sender, receiver) = mpsc::sync_channel::<T>(1);
    let attempt = &attempt;

    thread::scope(|scope| {
        for worker_id in 0..num_workers {
            let sender = sender.clone();
            let token = token.clone();
            scope.spawn(move || {
                let mut rng = RandomSource::new();
                while !token.is_cancellation_requested() {
                    if let Some(result) = attempt(worker_id, &mut rng) {
                        let _ = sender.try_send(result);
                        return;
                    }
                }
            });
        }
        drop(sender);

        let result = receiver
            .recv()
            .expect("every worker exited without producing a result");
        token.cancel();
        debug!("race over {} workers finished", num_workers);
        result
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_single_worker() {
        let result = race(1, |id, _| Some(id));
        assert_eq!(result, 0);
    }

    #[test]
    fn test_first_result_wins_and_terminates() {
        let result = race(4, |id, _| if id == 2 { Some(42u64) } else { None });
        assert_eq!(result, 42);
    }

    #[test]
    fn test_workers_retry_until_success() {
        let counter = AtomicUsize::new(0);
        let result = race(2, |_, _| {
            if counter.fetch_add(1, Ordering::SeqCst) >= 50 {
                Some("done")
            } else {
                None
            }
        });
        assert_eq!(result, "done");
        assert!(counter.load(Ordering::SeqCst) >= 50);
    }

    #[test]
    fn test_all_workers_see_distinct_ids() {
        use std::sync::Mutex;
        let seen = Mutex::new(Vec::new());
        // every worker records its id once, then the race resolves
        let _ = race(4, |id, _| {
            let mut guard = seen.lock().unwrap();
            if !guard.contains(&id) {
                guard.push(id);
            }
            if guard.len() == 4 {
                Some(())
            } else {
                None
            }
        });
        let mut ids = seen.into_inner().unwrap();
        ids.sort();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }
}
