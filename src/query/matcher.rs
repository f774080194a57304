use crate::catalog::Role;
use crate::query::fast_lowercase::FastLowercase;

/// Whether `query` occurs case-insensitively in the role's name, description
/// or any one of its permission tokens
pub fn role_matches(role: &Role, query: &str) -> bool {
    role.name.fast_contains_ignore_case(query)
        || role.description.fast_contains_ignore_case(query)
        || role
            .permissions
            .iter()
            .any(|perm| perm.fast_contains_ignore_case(query))
}

/// Stable filter over the catalog. The result keeps catalog order; callers
/// treat the first element as the recommended pick.
pub fn match_roles(query: &str, roles: &[Role]) -> Vec<Role> {
    roles
        .iter()
        .filter(|role| role_matches(role, query))
        .cloned()
        .collect()
}
