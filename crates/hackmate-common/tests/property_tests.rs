use hackmate_common::csrf::csrf_token;
use hackmate_common::filter::{category_visibility, search_visibility, Visibility};
use hackmate_common::markup::escape_html;
use hackmate_common::notifications::BadgeUpdate;
use hackmate_common::schedule::{Debouncer, PollSchedule};
use proptest::prelude::*;

proptest! {
    #[test]
    fn badge_shows_exact_positive_count(count in 1i64..1_000_000) {
        prop_assert_eq!(BadgeUpdate::from_unread(count), BadgeUpdate::Show(count.to_string()));
    }

    #[test]
    fn csrf_found_among_unrelated_cookies(
        token in "[A-Za-z0-9]{1,64}",
        before in proptest::collection::vec("[a-z]{1,8}=[a-z0-9]{0,8}", 0..4),
        after in proptest::collection::vec("[a-z]{1,8}=[a-z0-9]{0,8}", 0..4),
    ) {
        let mut cookies = before.clone();
        cookies.push(format!("csrftoken={}", token));
        cookies.extend(after);
        prop_assert_eq!(csrf_token(&cookies.join("; ")), token);
    }

    #[test]
    fn text_always_matches_own_substring(text in "[a-zA-Z ]{1,40}", start in 0usize..40, len in 0usize..40) {
        let start = start.min(text.len());
        let end = (start + len).min(text.len());
        let term = &text[start..end];
        prop_assert_eq!(search_visibility(&text, term), Visibility::Shown);
    }

    #[test]
    fn all_shows_any_category(category in proptest::option::of("[a-z]{0,12}")) {
        prop_assert_eq!(category_visibility("all", category.as_deref()), Visibility::Shown);
    }

    #[test]
    fn escaped_text_has_no_markup(s in ".{0,200}") {
        let escaped = escape_html(&s);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
    }

    #[test]
    fn poll_deadline_always_in_future(interval in 1u64..100_000, start in 0u64..1_000_000, gap in 0u64..1_000_000) {
        let mut s = PollSchedule::new(interval);
        s.start(start);
        let now = start + gap;
        prop_assert!(s.advance(now));
        let next = s.next_deadline().unwrap();
        prop_assert!(next > now);
        prop_assert!(next - now <= interval);
        prop_assert_eq!((next - start) % interval, 0);
    }

    #[test]
    fn debouncer_delivers_only_last(values in proptest::collection::vec(any::<u32>(), 1..20), wait in 1u64..1_000) {
        let mut d = Debouncer::new(wait);
        let mut now = 0;
        for v in &values {
            d.trigger(now, *v);
            now += wait - 1;
        }
        let deadline = d.deadline().unwrap();
        prop_assert_eq!(d.advance(deadline), values.last().copied());
        prop_assert_eq!(d.advance(deadline + wait), None);
    }
}
