//! Linear convolution with optional centered "valid" cropping.

/// Computes the full linear convolution of `a` and `b`.
///
/// The result has length `a.len() + b.len() - 1`; either operand being
/// empty yields an empty result. Convolution is commutative, so operand
/// order does not affect the values.
pub fn convolve_full(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut result = vec![0.0; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            result[i + j] += x * y;
        }
    }
    result
}

/// Computes the linear convolution of `a` and `b` cropped to the centered
/// valid window, adjusted by `margin` samples on each side.
///
/// The valid window is the central region where both operands fully
/// overlap; its nominal length is `max(len) - min(len) + 1`. A positive
/// `margin` trims that many extra samples from each side; a negative
/// `margin` grows the window into the edge-effect region instead. The
/// window is clamped to the bounds of the full convolution, so a grown
/// window over very short operands yields whatever samples exist.
pub fn convolve_valid(a: &[f64], b: &[f64], margin: isize) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    // The longer operand acts as the signal, the shorter as the filter.
    let (signal, filter) = if a.len() < b.len() { (b, a) } else { (a, b) };
    let full = convolve_full(signal, filter);

    let size = (signal.len() - filter.len() + 1) as isize;
    let padding = (filter.len() - 1) as isize;
    let start = (padding + margin).clamp(0, full.len() as isize) as usize;
    let end = (padding + size - margin)
        .min(full.len() as isize)
        .max(start as isize) as usize;
    full[start..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_known_values() {
        let out = convolve_full(&[1.0, 2.0, 3.0], &[1.0, 1.0]);
        assert_eq!(out, vec![1.0, 3.0, 5.0, 3.0]);
    }

    #[test]
    fn full_length_law() {
        let a = [1.0, -2.0, 0.5, 3.0, 7.0];
        let b = [0.25, 1.0, -1.0];
        assert_eq!(convolve_full(&a, &b).len(), a.len() + b.len() - 1);
    }

    #[test]
    fn full_is_commutative() {
        let a = [1.0, -2.0, 0.5, 3.0];
        let b = [0.25, 1.0, -1.0];
        assert_eq!(convolve_full(&a, &b), convolve_full(&b, &a));
    }

    #[test]
    fn full_empty_operand() {
        assert!(convolve_full(&[], &[1.0, 2.0]).is_empty());
        assert!(convolve_full(&[1.0, 2.0], &[]).is_empty());
    }

    #[test]
    fn valid_known_values() {
        let out = convolve_valid(&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, 1.0, 1.0], 0);
        assert_eq!(out, vec![6.0, 9.0, 12.0]);
    }

    #[test]
    fn valid_length_law() {
        let a = [1.0, -2.0, 0.5, 3.0, 7.0, -1.0, 4.0];
        let b = [0.25, 1.0, -1.0];
        let out = convolve_valid(&a, &b, 0);
        assert_eq!(out.len(), a.len() - b.len() + 1);
        // Swapped operands crop to the same window.
        assert_eq!(convolve_valid(&b, &a, 0), out);
    }

    #[test]
    fn positive_margin_trims_each_side() {
        let out = convolve_valid(
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0],
            &[1.0, 1.0, 1.0],
            1,
        );
        assert_eq!(out, vec![9.0, 12.0, 15.0]);
    }

    #[test]
    fn negative_margin_grows_each_side() {
        let full = convolve_full(&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, 1.0, 1.0]);
        let grown = convolve_valid(&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, 1.0, 1.0], -1);
        assert_eq!(grown, full[1..6].to_vec());
    }

    #[test]
    fn negative_margin_clamps_to_full_result() {
        // Length-1 signal against a length-2 filter: the grown window would
        // reach outside the full convolution and must clamp to it.
        let out = convolve_valid(&[3.0], &[0.5, 2.0], -1);
        assert_eq!(out, vec![1.5, 6.0]);
    }

    #[test]
    fn excessive_positive_margin_yields_empty() {
        let out = convolve_valid(&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, 1.0, 1.0], 5);
        assert!(out.is_empty());
    }

    #[test]
    fn valid_empty_operand() {
        assert!(convolve_valid(&[], &[1.0], 0).is_empty());
    }
}
