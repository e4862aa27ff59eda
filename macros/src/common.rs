//! Shared utilities for the derive macros.

use syn::{Attribute, Field, Fields, Index, Member, Meta};

/// The helper attribute recognized by `#[derive(Iterable)]`.
pub(crate) const ATTR: &str = "iterable";

/// The field argument naming the delegation target.
pub(crate) const STORAGE: &str = "storage";

/// Whether `attrs` contains `#[iterable(storage)]`.
///
/// # Returns
/// - `Ok(true)` if the attribute is present and well formed.
/// - `Ok(false)` if no `#[iterable(...)]` attribute is present.
/// - `Err(...)` if the attribute is present with any other shape, with no
///   arguments, or names `storage` more than once.
pub(crate) fn has_storage_flag(attrs: &[Attribute]) -> syn::Result<bool> {
    let mut found = false;
    for attr in attrs.iter().filter(|a| a.path().is_ident(ATTR)) {
        match &attr.meta {
            Meta::List(list) if !list.tokens.is_empty() => {}
            _ => {
                return Err(syn::Error::new_spanned(
                    attr,
                    format!("[iterable] expected `#[{ATTR}({STORAGE})]`"),
                ));
            }
        }
        attr.parse_nested_meta(|meta| {
            if !meta.path.is_ident(STORAGE) {
                return Err(meta.error(format!("[iterable] unknown argument, expected `{STORAGE}`")));
            }
            if found {
                return Err(meta.error(format!("[iterable] duplicate argument `{STORAGE}`")));
            }
            found = true;
            Ok(())
        })?;
    }
    Ok(found)
}

/// Rejects `#[iterable(...)]` placed on the item rather than on a field.
pub(crate) fn reject_item_attrs(attrs: &[Attribute]) -> syn::Result<()> {
    match attrs.iter().find(|a| a.path().is_ident(ATTR)) {
        Some(attr) => Err(syn::Error::new_spanned(
            attr,
            format!("[iterable] `#[{ATTR}(...)]` belongs on a field"),
        )),
        None => Ok(()),
    }
}

/// How to name a field in `self.<member>`: its identifier, or its position
/// for tuple structs.
pub(crate) fn field_member(index: usize, field: &Field) -> Member {
    match &field.ident {
        Some(ident) => Member::Named(ident.clone()),
        None => Member::Unnamed(Index::from(index)),
    }
}

/// Finds the single field marked `#[iterable(storage)]`, if any.
pub(crate) fn storage_field(fields: &Fields) -> syn::Result<Option<(Member, &Field)>> {
    let mut storage: Option<(Member, &Field)> = None;
    for (index, field) in fields.iter().enumerate() {
        if !has_storage_flag(&field.attrs)? {
            continue;
        }
        if storage.is_some() {
            return Err(syn::Error::new_spanned(
                field,
                format!("[iterable] only one field can be marked `#[{ATTR}({STORAGE})]`"),
            ));
        }
        storage = Some((field_member(index, field), field));
    }
    Ok(storage)
}
