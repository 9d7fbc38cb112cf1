//! Desugaring for null-safe member access (`?->`).
//!
//! `p ?-> m()` → `p != nullptr ? p->m() : nullptr`

use sh_ast::host::NULL_SENTINEL;

/// Build the guarded access; the receiver is repeated verbatim, so it is
/// evaluated twice by the generated code.
pub fn guarded_access(receiver: &str, member: &str) -> String {
    let receiver = receiver.trim();
    format!(
        "{receiver} != {NULL_SENTINEL} ? {receiver}->{} : {NULL_SENTINEL}",
        member.trim()
    )
}
