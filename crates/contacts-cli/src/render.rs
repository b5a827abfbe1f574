//! Plain-text rendering of contacts for terminal output.

use crate::client::ContactView;

/// One contact per line: `id<TAB>name<TAB>email<TAB>phone`.
pub fn contact_line(contact: &ContactView) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        contact.id, contact.name, contact.email, contact.phone
    )
}

/// Renders a contact list, or a placeholder when it is empty.
pub fn contact_table(contacts: &[ContactView]) -> String {
    if contacts.is_empty() {
        return "No contacts found.".to_string();
    }
    let mut out = String::from("ID\tNAME\tEMAIL\tPHONE");
    for contact in contacts {
        out.push('\n');
        out.push_str(&contact_line(contact));
    }
    out
}
