pub mod stage1_headers;
pub mod stage2_coerce;
pub mod stage3_derive;
pub mod stage4_classify;
pub mod stage5_campaigns;
pub mod stage6_score;
pub mod stage7_report;

use rayon::prelude::*;

/// Rows per partition in the reduce stages.
pub const CHUNK_ROWS: usize = 4096;

/// Folds fixed-size partitions in parallel and merges the partials in partition order.
///
/// Partition boundaries do not depend on the thread count, so the result is
/// bit-identical from run to run.
pub fn fold_chunks<T, A, F, M>(items: &[T], fold: F, merge: M) -> A
where
    T: Sync,
    A: Default + Send,
    F: Fn(&mut A, &T) + Sync,
    M: Fn(A, A) -> A,
{
    let partials: Vec<A> = items
        .par_chunks(CHUNK_ROWS)
        .map(|chunk| {
            let mut acc = A::default();
            for item in chunk {
                fold(&mut acc, item);
            }
            acc
        })
        .collect();
    partials.into_iter().fold(A::default(), merge)
}
