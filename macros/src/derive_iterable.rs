//! Implementation of `#[derive(Iterable)]`
//!
//! A plain host gets `IntoIterator for &Host`, yielding the synthesized
//! `iterable::Iter`. A host with one `#[iterable(storage)]` field gets
//! `iterable::Delegate` plus `IntoIterator` for `&Host` and `&mut Host`,
//! both forwarding to the field's own iterators.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Data, DeriveInput, Field, GenericParam, Generics, Lifetime, LifetimeParam, Member,
    parse_macro_input, parse_quote,
};

use crate::common::{reject_item_attrs, storage_field};

pub fn derive_iterable_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(data) => {
            return Err(syn::Error::new_spanned(
                data.enum_token,
                "[iterable] #[derive(Iterable)] is only supported on structs",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "[iterable] #[derive(Iterable)] is only supported on structs",
            ));
        }
    };
    reject_item_attrs(&input.attrs)?;

    match storage_field(fields)? {
        Some((member, field)) => Ok(delegating_host(input, &member, field)),
        None => Ok(indexed_host(input)),
    }
}

/// The host's generics with a fresh leading lifetime for the borrowed impls.
fn with_borrow_lifetime(generics: &Generics) -> (Generics, Lifetime) {
    let lifetime: Lifetime = parse_quote!('__iterable);
    let mut generics = generics.clone();
    generics
        .params
        .insert(0, GenericParam::Lifetime(LifetimeParam::new(lifetime.clone())));
    (generics, lifetime)
}

/// `for x in &host` over a host that implements `Indexed` itself.
fn indexed_host(input: &DeriveInput) -> TokenStream2 {
    let name = &input.ident;
    let (_, ty_generics, _) = input.generics.split_for_impl();
    let (mut generics, lt) = with_borrow_lifetime(&input.generics);
    generics
        .make_where_clause()
        .predicates
        .push(parse_quote!(#name #ty_generics: ::iterable::Indexed));
    let (impl_generics, _, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::core::iter::IntoIterator for &#lt #name #ty_generics #where_clause {
            type Item = &#lt <#name #ty_generics as ::iterable::Indexed>::Element;
            type IntoIter = ::iterable::Iter<#lt, #name #ty_generics>;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                ::iterable::Iter::new(self)
            }
        }
    }
}

/// `Delegate` and `for` loops forwarding to the storage field.
fn delegating_host(input: &DeriveInput, member: &Member, field: &Field) -> TokenStream2 {
    let name = &input.ident;
    let storage = &field.ty;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let (mut shared, lt) = with_borrow_lifetime(&input.generics);
    shared
        .make_where_clause()
        .predicates
        .push(parse_quote!(&#lt #storage: ::core::iter::IntoIterator));
    let (shared_impl, _, shared_where) = shared.split_for_impl();

    let (mut exclusive, _) = with_borrow_lifetime(&input.generics);
    exclusive
        .make_where_clause()
        .predicates
        .push(parse_quote!(&#lt mut #storage: ::core::iter::IntoIterator));
    let (exclusive_impl, _, exclusive_where) = exclusive.split_for_impl();

    quote! {
        impl #impl_generics ::iterable::Delegate for #name #ty_generics #where_clause {
            type Storage = #storage;

            #[inline]
            fn storage(&self) -> &Self::Storage {
                &self.#member
            }

            #[inline]
            fn storage_mut(&mut self) -> &mut Self::Storage {
                &mut self.#member
            }
        }

        impl #shared_impl ::core::iter::IntoIterator for &#lt #name #ty_generics #shared_where {
            type Item = <&#lt #storage as ::core::iter::IntoIterator>::Item;
            type IntoIter = <&#lt #storage as ::core::iter::IntoIterator>::IntoIter;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                ::core::iter::IntoIterator::into_iter(&self.#member)
            }
        }

        impl #exclusive_impl ::core::iter::IntoIterator for &#lt mut #name #ty_generics #exclusive_where {
            type Item = <&#lt mut #storage as ::core::iter::IntoIterator>::Item;
            type IntoIter = <&#lt mut #storage as ::core::iter::IntoIterator>::IntoIter;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                ::core::iter::IntoIterator::into_iter(&mut self.#member)
            }
        }
    }
}
