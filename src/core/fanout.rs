//! Bounded, order-preserving fan-out over scoped threads.

use std::thread;

/// Applies `f` to every item with at most `width` items in flight at once,
/// returning results in the same order as `items`.
///
/// Each batch is joined in spawn order, so a slow early item never lets a
/// later result jump ahead of it. A panic in `f` is re-raised on the caller.
pub fn ordered_fan_out<T, R, F>(items: &[T], width: usize, f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync,
{
    let f = &f;
    let mut results = Vec::with_capacity(items.len());

    for batch in items.chunks(width.max(1)) {
        thread::scope(|scope| {
            let handles: Vec<_> = batch
                .iter()
                .map(|item| scope.spawn(move || f(item)))
                .collect();

            for handle in handles {
                match handle.join() {
                    Ok(result) => results.push(result),
                    Err(panic) => std::panic::resume_unwind(panic),
                }
            }
        });
    }

    results
}
