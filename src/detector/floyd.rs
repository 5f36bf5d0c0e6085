use serde::Serialize;

/// Shape of the eventually-periodic sequence `x0, f(x0), f(f(x0)), ...`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleSpan {
    /// Index of the first element that is part of the loop
    pub mu: usize,
    /// Length of the loop
    pub lambda: usize,
}

/// Floyd's tortoise and hare over an iterated function.
///
/// `f` must map a finite set into itself, otherwise the sequence need not
/// repeat and this does not terminate. Runs in `O(mu + lambda)` applications
/// of `f` and constant extra space.
pub fn floyd<T, F>(f: F, x0: T) -> CycleSpan
where
    T: PartialEq,
    F: Fn(&T) -> T,
{
    // Phase 1: the hare moves twice as fast until both meet inside the loop,
    // at an index that is a multiple of lambda.
    let mut tortoise = f(&x0);
    let mut hare = f(&f(&x0));
    while tortoise != hare {
        tortoise = f(&tortoise);
        hare = f(&f(&hare));
    }

    // Phase 2: restarting the tortoise at x0, both move one step at a time and
    // meet at the start of the loop.
    let mut mu = 0;
    tortoise = x0;
    while tortoise != hare {
        tortoise = f(&tortoise);
        hare = f(&hare);
        mu += 1;
    }

    // Phase 3: walk the hare once around the loop.
    let mut lambda = 1;
    hare = f(&tortoise);
    while tortoise != hare {
        hare = f(&hare);
        lambda += 1;
    }

    CycleSpan { mu, lambda }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_then_loop() {
        // 2 -> 0 -> 6 -> 3 -> 1 -> 6 -> ...
        let table = [6, 6, 0, 1, 4, 3, 3, 4, 0];
        let span = floyd(|&x: &usize| table[x], 2);

        assert_eq!(span, CycleSpan { mu: 2, lambda: 3 });
    }

    #[test]
    fn test_pure_loop() {
        let span = floyd(|&x: &u32| (x + 1) % 5, 0);
        assert_eq!(span, CycleSpan { mu: 0, lambda: 5 });
    }

    #[test]
    fn test_fixed_point() {
        let span = floyd(|_: &u8| 7, 3);
        assert_eq!(span, CycleSpan { mu: 1, lambda: 1 });
    }

    #[test]
    fn test_owned_values() {
        let next = |s: &String| match s.as_str() {
            "start" => "a".to_string(),
            "a" => "b".to_string(),
            _ => "a".to_string(),
        };

        assert_eq!(
            floyd(next, "start".to_string()),
            CycleSpan { mu: 1, lambda: 2 }
        );
    }
}
