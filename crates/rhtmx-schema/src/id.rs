//! Endpoint id composition

/// Builds the dotted id of an endpoint
///
/// Returns `None` when the method's own id is empty, whatever the group and
/// controller ids are. Otherwise joins group ids, the controller id and the
/// method id with `.`. Unlike [`compose_mask`](crate::path::compose_mask)
/// this is a plain join: empty segments stay in as empty components.
///
/// # Examples
///
/// ```
/// use rhtmx_schema::id::compose_id;
///
/// assert_eq!(compose_id(&["admin"], "users", "list").as_deref(), Some("admin.users.list"));
/// assert_eq!(compose_id(&["admin"], "users", ""), None);
/// assert_eq!(compose_id(&["admin"], "", "list").as_deref(), Some("admin..list"));
/// ```
pub fn compose_id<S: AsRef<str>>(
    group_ids: &[S],
    controller_id: &str,
    method_id: &str,
) -> Option<String> {
    if method_id.is_empty() {
        return None;
    }

    let id = group_ids
        .iter()
        .map(AsRef::as_ref)
        .chain([controller_id, method_id])
        .collect::<Vec<_>>()
        .join(".");

    Some(id)
}
