//! Sort comparison.
//!
//! One comparator covers every sort key. Callers apply it with `sort_by`,
//! which is stable in Rust, so entities that compare equal retain their
//! relative input order — the only ordering guarantee beyond the primary key.

use std::cmp::Ordering;

use branches_query::SortKey;

use crate::fields::SearchFields;
use crate::score::Relevance;

/// Compares two entities under the given sort key.
///
/// `query` is the pre-normalized search text and is only consulted for
/// [`SortKey::Relevance`]; without one, relevance falls back to newest-first
/// (callers normally prevent this via
/// [`branches_query::QuerySpec::effective_sort`]).
///
/// Keys an entity kind does not support compare equal: sorting replies by
/// reply count leaves their order untouched.
pub fn compare<T: SearchFields + Relevance>(
    a: &T,
    b: &T,
    key: SortKey,
    query: Option<&str>,
) -> Ordering {
    match key {
        SortKey::Newest => b.created_at().cmp(&a.created_at()),
        SortKey::Oldest => a.created_at().cmp(&b.created_at()),
        SortKey::NetScore => b.net_score().cmp(&a.net_score()),
        SortKey::Views => b.views().cmp(&a.views()),
        SortKey::Replies => b
            .reply_count()
            .unwrap_or(0)
            .cmp(&a.reply_count().unwrap_or(0)),
        SortKey::Author => a
            .author_name()
            .to_lowercase()
            .cmp(&b.author_name().to_lowercase()),
        SortKey::Points => b.points().len().cmp(&a.points().len()),
        SortKey::Relevance => match query {
            Some(q) => b
                .relevance(q)
                .partial_cmp(&a.relevance(q))
                .unwrap_or(Ordering::Equal)
                // Documented tie-break: equal scores order newest-first.
                .then_with(|| b.created_at().cmp(&a.created_at())),
            None => b.created_at().cmp(&a.created_at()),
        },
    }
}

#[cfg(test)]
mod tests {
    use branches_model::{Discussion, Reply};
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, day, 0, 0, 0).unwrap()
    }

    fn discussions() -> Vec<Discussion> {
        let mut one = Discussion::new("d1", "Cats are great", "", "zoe", at(1));
        one.upvotes = 5;
        one.views = 10;

        let mut two = Discussion::new("d2", "Dogs rule", "", "alice", at(2));
        two.upvotes = 1;
        two.views = 30;
        two.replies.push(Reply::new("r1", "x", "bob", at(2)));

        let mut three = Discussion::new("d3", "Cats vs dogs debate", "", "Bob", at(3));
        three.upvotes = 9;
        three.views = 20;

        vec![one, two, three]
    }

    fn sorted_ids(key: SortKey, query: Option<&str>) -> Vec<String> {
        let mut items = discussions();
        items.sort_by(|a, b| compare(a, b, key, query));
        items.into_iter().map(|d| d.id).collect()
    }

    #[test]
    fn newest_is_descending_by_timestamp() {
        assert_eq!(sorted_ids(SortKey::Newest, None), vec!["d3", "d2", "d1"]);
    }

    #[test]
    fn oldest_reverses_newest_for_distinct_timestamps() {
        let newest = sorted_ids(SortKey::Newest, None);
        let mut reversed = newest.clone();
        reversed.reverse();
        assert_eq!(sorted_ids(SortKey::Oldest, None), reversed);
    }

    #[test]
    fn net_score_is_descending() {
        assert_eq!(sorted_ids(SortKey::NetScore, None), vec!["d3", "d1", "d2"]);
    }

    #[test]
    fn net_score_accounts_for_downvotes() {
        let mut a = Discussion::new("a", "", "", "x", at(1));
        a.upvotes = 10;
        a.downvotes = 8; // net 2
        let mut b = Discussion::new("b", "", "", "x", at(1));
        b.upvotes = 5; // net 5

        assert_eq!(
            compare(&b, &a, SortKey::NetScore, None),
            Ordering::Less,
            "net 5 sorts before net 2"
        );
    }

    #[test]
    fn views_is_descending() {
        assert_eq!(sorted_ids(SortKey::Views, None), vec!["d2", "d3", "d1"]);
    }

    #[test]
    fn replies_is_descending_by_reply_count() {
        assert_eq!(sorted_ids(SortKey::Replies, None), vec!["d2", "d1", "d3"]);
    }

    #[test]
    fn author_is_ascending_and_case_insensitive() {
        assert_eq!(sorted_ids(SortKey::Author, None), vec!["d2", "d3", "d1"]);
    }

    #[test]
    fn points_is_descending_by_point_count() {
        let mut items = discussions();
        items[0]
            .points
            .push(branches_model::AiPoint::new("p", "t", branches_model::PointKind::Topic));
        items.sort_by(|a, b| compare(a, b, SortKey::Points, None));
        assert_eq!(items[0].id, "d1");
    }

    #[test]
    fn relevance_sorts_by_score_descending() {
        // d1 and d3 both get the title weight; d3's higher engagement
        // (9 net, 20 views) outscores d1. d2 has no match at all.
        let ids = sorted_ids(SortKey::Relevance, Some("cats"));
        assert_eq!(ids[0], "d3");
        assert_eq!(ids[1], "d1");
        assert_eq!(ids[2], "d2");
    }

    #[test]
    fn relevance_ties_break_newest_first() {
        let a = Discussion::new("a", "zebra", "", "x", at(1));
        let b = Discussion::new("b", "zebra", "", "x", at(5));
        assert_eq!(
            compare(&b, &a, SortKey::Relevance, Some("zebra")),
            Ordering::Less,
            "equal scores order the newer entity first"
        );
    }

    #[test]
    fn reply_count_key_is_a_no_op_for_replies() {
        let a = Reply::new("a", "", "x", at(1));
        let b = Reply::new("b", "", "x", at(2));
        assert_eq!(compare(&a, &b, SortKey::Replies, None), Ordering::Equal);
    }
}
