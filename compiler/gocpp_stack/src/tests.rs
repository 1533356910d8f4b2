use super::*;

#[test]
fn shallow_recursion_is_unaffected() {
    fn sum_to(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { n + sum_to(n - 1) })
    }

    assert_eq!(sum_to(100), 5050);
}

#[test]
fn deep_recursion_grows_the_stack() {
    fn nest(n: u64) -> String {
        ensure_sufficient_stack(|| {
            if n == 0 {
                String::new()
            } else {
                let mut inner = nest(n - 1);
                inner.push('(');
                inner
            }
        })
    }

    // Far deeper than a default 8MB main-thread stack allows.
    assert_eq!(nest(100_000).len(), 100_000);
}

#[test]
fn result_passes_through() {
    let result: Result<u32, String> = ensure_sufficient_stack(|| Ok(7));
    assert_eq!(result, Ok(7));
}
