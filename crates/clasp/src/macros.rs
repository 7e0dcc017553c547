//! Block-shaped macro forms of the scope construct.
//!
//! Each macro expands the body inside a single-iteration `for` loop, so
//! `break` and `continue` raised in the body are captured by the scope's
//! own control frame and never reach an enclosing loop or scope. The exit
//! guard is armed outside that loop, which is what makes [`scope_break!`]
//! safe: leaving the loop early still drops the guard.

/// Paired-action scope: evaluate `enter`, run the block exactly once, then
/// evaluate `exit` exactly once, however the block finishes.
///
/// `break` and `continue` inside the block terminate *this* scope (the exit
/// action still runs) and do not affect any enclosing loop.
///
/// ```rust
/// use std::cell::RefCell;
///
/// let log = RefCell::new(Vec::new());
/// clasp::scoped!(log.borrow_mut().push("enter"), log.borrow_mut().push("exit"), {
///     log.borrow_mut().push("body");
/// });
/// assert_eq!(*log.borrow(), ["enter", "body", "exit"]);
/// ```
#[macro_export]
macro_rules! scoped {
    ($enter:expr, $exit:expr, $body:block) => {{
        let _ = $enter;
        let _scope_exit = $crate::on_exit(|| {
            let _ = $exit;
        });
        for _ in ::core::iter::once(()) $body
    }};
}

/// Exit-only scope: [`scoped!`] with a no-op enter.
///
/// ```rust
/// use std::cell::Cell;
///
/// let cleaned = Cell::new(false);
/// clasp::scope_exit!(cleaned.set(true), {
///     assert!(!cleaned.get());
/// });
/// assert!(cleaned.get());
/// ```
#[macro_export]
macro_rules! scope_exit {
    ($exit:expr, $body:block) => {
        $crate::scoped!((), $exit, $body)
    };
}

/// Bound-resource scope: one or more `let name = init => release;`
/// declarations followed by a single shared block.
///
/// Each declaration binds `name` for the block's duration; the matching
/// `release` expression receives the owned value when the scope exits.
/// Chained declarations release in reverse order (last bound, first
/// released), matching nested-scope unwind order. Inside the block, `name`
/// is a mutable reference to the bound value; inside its `release`
/// expression, `name` is the owned value.
///
/// ```rust
/// use std::cell::RefCell;
///
/// let order = RefCell::new(Vec::new());
/// clasp::bound!(
///     let a = vec![1u8] => order.borrow_mut().push(("a", a));
///     let b = vec![2u8] => order.borrow_mut().push(("b", b));
///     {
///         a[0] += 10;
///         b[0] += 10;
///     }
/// );
/// let order = order.into_inner();
/// assert_eq!(order[0], ("b", vec![12]));
/// assert_eq!(order[1], ("a", vec![11]));
/// ```
#[macro_export]
macro_rules! bound {
    ($body:block) => {
        for _ in ::core::iter::once(()) $body
    };
    (let $name:ident = $init:expr => $release:expr; $($rest:tt)+) => {{
        let mut __clasp_bound = $crate::bind($init, |$name| {
            let _ = $release;
        });
        let $name = &mut *__clasp_bound;
        $crate::bound!($($rest)+)
    }};
}

/// Explicitly terminate the innermost enclosing scope body.
///
/// Ends the body's execution immediately; the scope's exit/release action
/// still runs, and control continues after the entire scope construct. Only
/// valid lexically inside a scope body (or another loop, which it will
/// terminate instead); anywhere else it is a compile error.
///
/// ```rust
/// use std::cell::Cell;
///
/// let cleaned = Cell::new(false);
/// clasp::scope_exit!(cleaned.set(true), {
///     if true {
///         clasp::scope_break!();
///     }
///     unreachable!("terminated above");
/// });
/// assert!(cleaned.get());
/// ```
#[macro_export]
macro_rules! scope_break {
    () => {
        break
    };
}

#[cfg(test)]
mod tests {
    use clasp_test_utils::Probe;

    #[test]
    fn scoped_runs_enter_body_exit_in_order() {
        let probe = Probe::new();
        scoped!(probe.mark("enter"), probe.mark("exit"), {
            probe.mark("body");
        });
        assert_eq!(probe.events(), ["enter", "body", "exit"]);
    }

    #[test]
    fn scoped_with_empty_body_still_pairs_actions() {
        let probe = Probe::new();
        scoped!(probe.mark("enter"), probe.mark("exit"), {});
        assert_eq!(probe.events(), ["enter", "exit"]);
    }

    #[test]
    fn scope_break_skips_rest_of_body_but_not_exit() {
        let probe = Probe::new();
        scope_exit!(probe.mark("exit"), {
            probe.mark("before");
            if probe.count("before") == 1 {
                scope_break!();
            }
            probe.mark("after");
        });
        assert_eq!(probe.events(), ["before", "exit"]);
    }

    #[test]
    fn continue_terminates_the_scope_with_exit() {
        let probe = Probe::new();
        scope_exit!(probe.mark("exit"), {
            probe.mark("body");
            if probe.count("body") == 1 {
                continue;
            }
            probe.mark("unreached");
        });
        assert_eq!(probe.events(), ["body", "exit"]);
    }

    #[test]
    fn break_in_body_does_not_reach_outer_loop() {
        let probe = Probe::new();
        for round in 0..3 {
            scope_exit!(probe.mark(format!("exit {round}")), {
                scope_break!();
            });
        }
        assert_eq!(probe.events(), ["exit 0", "exit 1", "exit 2"]);
    }

    #[test]
    fn sibling_scopes_at_one_lexical_point_are_independent() {
        let probe = Probe::new();
        scoped!(probe.mark("first enter"), probe.mark("first exit"), {});
        scoped!(probe.mark("second enter"), probe.mark("second exit"), {});
        assert_eq!(
            probe.events(),
            ["first enter", "first exit", "second enter", "second exit"]
        );
    }

    #[test]
    fn bound_chain_acquires_forward_releases_backward() {
        let probe = Probe::new();
        bound!(
            let first = { probe.mark("acquire first"); 1u8 } => { probe.mark("release first"); let _ = first; };
            let second = { probe.mark("acquire second"); 2u8 } => { probe.mark("release second"); let _ = second; };
            {
                probe.mark(format!("body {} {}", first, second));
            }
        );
        assert_eq!(
            probe.events(),
            [
                "acquire first",
                "acquire second",
                "body 1 2",
                "release second",
                "release first",
            ]
        );
    }
}
