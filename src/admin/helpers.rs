//! Path building and pagination helpers shared by the entity modules

use log::debug;
use std::future::Future;

use crate::admin::traits::{ListParams, ListResponse};
use crate::error::Result;

/// Query string builder that skips unset parameters
///
/// Parameters are emitted in the order they are pushed.
#[derive(Debug, Default)]
pub(crate) struct QueryBuilder {
    parts: Vec<String>,
}

impl QueryBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Start from the shared paging parameters: `limit`, `before_id`, `after_id`
    pub(crate) fn from_params(params: &ListParams) -> Self {
        let mut query = Self::new();
        query.push_limit(params.limit);
        query.push("before_id", params.before_id.as_deref());
        query.push("after_id", params.after_id.as_deref());
        query
    }

    pub(crate) fn push_limit(&mut self, limit: u32) {
        if limit > 0 {
            self.parts.push(format!("limit={}", limit));
        }
    }

    pub(crate) fn push(&mut self, name: &str, value: Option<&str>) {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.parts
                .push(format!("{}={}", name, urlencoding::encode(v)));
        }
    }

    /// Append the query string (if any) to `path`
    pub(crate) fn finish(self, path: &str) -> String {
        if self.parts.is_empty() {
            return path.to_string();
        }
        format!("{}?{}", path, self.parts.join("&"))
    }
}

/// Treat an empty string the same as an absent one
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Join path segments under the organizations base path, encoding each one
pub(crate) fn org_path(segments: &[&str]) -> String {
    let mut path = crate::config::api::ORGANIZATIONS.to_string();
    for segment in segments {
        path.push('/');
        path.push_str(&urlencoding::encode(segment));
    }
    path
}

/// Fetch every page of a cursor-paginated collection, in order
///
/// `fetch` is called with a forward page of `page_size` items; the first
/// call has no cursor, later calls carry the previous page's `last_id`.
/// Stops when a page reports no more data or carries no `last_id`.
pub async fn drain_pages<T, F, Fut>(page_size: u32, mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(ListParams) -> Fut,
    Fut: Future<Output = Result<ListResponse<T>>>,
{
    let mut all_items = Vec::new();
    let mut after_id: Option<String> = None;
    let mut page_num = 1u32;

    loop {
        let page = fetch(ListParams::page(page_size, after_id.take())).await?;
        debug!(
            "Page {} returned {} items (has_more: {})",
            page_num,
            page.data.len(),
            page.has_more
        );

        let next = page.next_cursor().map(str::to_string);
        all_items.extend(page.data);

        match next {
            Some(cursor) => {
                after_id = Some(cursor);
                page_num += 1;
            }
            None => break,
        }
    }

    debug!("Fetched {} total items over {} pages", all_items.len(), page_num);
    Ok(all_items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdminError;
    use std::cell::RefCell;

    #[test]
    fn test_query_builder_empty() {
        let query = QueryBuilder::from_params(&ListParams::default());
        assert_eq!(query.finish("/v1/organizations/workspaces"), "/v1/organizations/workspaces");
    }

    #[test]
    fn test_query_builder_order_is_fixed() {
        let params = ListParams {
            limit: 20,
            before_id: Some("b".to_string()),
            after_id: Some("a".to_string()),
        };
        let mut query = QueryBuilder::from_params(&params);
        query.push("status", Some("active"));
        query.push("workspace_id", Some("wrkspc_1"));
        assert_eq!(
            query.finish("/p"),
            "/p?limit=20&before_id=b&after_id=a&status=active&workspace_id=wrkspc_1"
        );
    }

    #[test]
    fn test_query_builder_skips_zero_and_empty() {
        let params = ListParams {
            limit: 0,
            before_id: Some(String::new()),
            after_id: Some("a".to_string()),
        };
        let mut query = QueryBuilder::from_params(&params);
        query.push("status", None);
        assert_eq!(query.finish("/p"), "/p?after_id=a");
    }

    #[test]
    fn test_query_builder_encodes_values() {
        let mut query = QueryBuilder::new();
        query.push("after_id", Some("a b&c"));
        assert_eq!(query.finish("/p"), "/p?after_id=a%20b%26c");
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("x")), Some("x"));
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_org_path() {
        assert_eq!(org_path(&[]), "/v1/organizations");
        assert_eq!(
            org_path(&["workspaces", "wrkspc_1", "members", "user_2"]),
            "/v1/organizations/workspaces/wrkspc_1/members/user_2"
        );
    }

    #[test]
    fn test_org_path_encodes_segments() {
        assert_eq!(org_path(&["invites", "a/b"]), "/v1/organizations/invites/a%2Fb");
    }

    fn page(ids: &[&str], has_more: bool) -> ListResponse<String> {
        ListResponse {
            data: ids.iter().map(|s| s.to_string()).collect(),
            has_more,
            first_id: ids.first().map(|s| s.to_string()),
            last_id: ids.last().map(|s| s.to_string()),
        }
    }

    #[tokio::test]
    async fn test_drain_pages_carries_cursor() {
        let calls = RefCell::new(Vec::new());
        let items = drain_pages(2, |params| {
            calls.borrow_mut().push(params.clone());
            let response = match params.after_id.as_deref() {
                None => page(&["a", "b"], true),
                Some("b") => page(&["c", "d"], true),
                Some("d") => page(&["e"], false),
                Some(other) => panic!("unexpected cursor {}", other),
            };
            async move { Ok(response) }
        })
        .await
        .unwrap();

        assert_eq!(items, vec!["a", "b", "c", "d", "e"]);
        let calls = calls.into_inner();
        assert_eq!(calls.len(), 3);
        assert!(calls.iter().all(|p| p.limit == 2 && p.before_id.is_none()));
    }

    #[tokio::test]
    async fn test_drain_pages_stops_without_last_id() {
        let mut count = 0;
        let items = drain_pages(100, |_| {
            count += 1;
            let mut response = page(&["a"], true);
            response.last_id = None;
            async move { Ok(response) }
        })
        .await
        .unwrap();

        assert_eq!(items, vec!["a"]);
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_drain_pages_propagates_error() {
        let result: Result<Vec<String>> = drain_pages(100, |params| async move {
            match params.after_id {
                None => Ok(page(&["a"], true)),
                Some(_) => Err(AdminError::Api {
                    status: 500,
                    message: "boom".to_string(),
                }),
            }
        })
        .await;

        assert!(matches!(result, Err(AdminError::Api { status: 500, .. })));
    }
}
