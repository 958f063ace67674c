use soroban_sdk::String;

use crate::types::Error;

const MAX_CONTACT_LEN: u32 = 100;
const MAX_PHONE_LEN: u32 = 20;

/// Validate a blood type. Accepts the empty string (not yet recorded) or
/// one of A, B, AB, O followed by + or -.
pub fn validate_blood_type(blood_type: &String) -> Result<(), Error> {
    let len = blood_type.len();
    if len == 0 {
        return Ok(());
    }
    if !(2..=3).contains(&len) {
        return Err(Error::InvalidBloodType);
    }

    let mut buf = [0u8; 3];
    blood_type.copy_into_slice(&mut buf[..len as usize]);

    let sign = buf[len as usize - 1];
    if sign != b'+' && sign != b'-' {
        return Err(Error::InvalidBloodType);
    }

    match (len, buf[0], buf[1]) {
        (2, b'A', _) | (2, b'B', _) | (2, b'O', _) => Ok(()),
        (3, b'A', b'B') => Ok(()),
        _ => Err(Error::InvalidBloodType),
    }
}

/// Validate a phone number: digits, spaces, hyphens, and a plus sign only.
/// The empty string is permitted.
pub fn validate_phone(phone: &String) -> Result<(), Error> {
    let len = phone.len();
    if len == 0 {
        return Ok(());
    }
    if len > MAX_PHONE_LEN {
        return Err(Error::InvalidPhone);
    }

    let mut buf = [0u8; MAX_PHONE_LEN as usize];
    phone.copy_into_slice(&mut buf[..len as usize]);

    for &b in &buf[..len as usize] {
        let valid = b.is_ascii_digit() || b == b' ' || b == b'-' || b == b'+';
        if !valid {
            return Err(Error::InvalidPhone);
        }
    }
    Ok(())
}

/// Validate an emergency contact name length.
pub fn validate_contact(contact: &String) -> Result<(), Error> {
    if contact.len() > MAX_CONTACT_LEN {
        return Err(Error::InvalidInput);
    }
    Ok(())
}
