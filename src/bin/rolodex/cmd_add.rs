use anyhow::Result;
use std::path::PathBuf;

use rolodex::book::AddressBook;
use rolodex::consts::DEFAULT_ADDRESS_TYPE;
use rolodex::model::{Address, Contact};
use rolodex::names::split_full_name;
use rolodex::validate::validate_contact;

use super::util::resolve_config;

#[allow(clippy::too_many_arguments)]
pub fn exec(
    path: Option<PathBuf>,
    full_name: String,
    phone: String,
    email: String,
    street: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zip: Option<String>,
    country: Option<String>,
) -> Result<()> {
    let cfg = resolve_config(path);
    let book = AddressBook::open_with_config(cfg)?;

    let parsed = split_full_name(&full_name);
    let mut contact = Contact::new(parsed.first, parsed.last, phone, email);

    let has_address = [&street, &city, &state, &zip, &country]
        .iter()
        .any(|f| f.is_some());
    if has_address {
        contact = contact.with_address(Address {
            kind: DEFAULT_ADDRESS_TYPE.to_string(),
            street: street.unwrap_or_default(),
            city: city.unwrap_or_default(),
            state: state.unwrap_or_default(),
            zip: zip.unwrap_or_default(),
            country: country.unwrap_or_default(),
        });
    }

    // Валидация до ядра: ядро принимает контакт как есть.
    validate_contact(&contact)?;

    book.add_contact(contact.clone());
    println!(
        "Added contact {} {} ({})",
        contact.first_name, contact.last_name, contact.phone_number
    );
    Ok(())
}
