/// Returns `count` evenly spaced samples over `[start, end]`, both ends included.
///
/// `end` may be smaller than `start`, in which case the samples run backwards.
/// A `count` of 1 yields `[start]`; 0 yields an empty vector.
#[must_use]
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        end
                    } else {
                        #[allow(clippy::cast_precision_loss)]
                        let offset = step * i as f64;
                        start + offset
                    }
                })
                .collect()
        }
    }
}
