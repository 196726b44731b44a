//! Tests for `#[bind(...)]` parsing behaviour.

use super::super::*;
use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use syn::{DeriveInput, parse_quote};

#[test]
fn parses_struct_and_field_attributes() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[bind(crate = "deps::keypath_config")]
        struct Demo {
            #[bind(key = "host")]
            address: String,
            #[bind(tag = "val=port,required")]
            port: u16,
            #[bind(skip)]
            token: String,
            #[bind(flatten)]
            common: Common,
            #[bind(nested)]
            alias: Port,
        }
    };

    let parsed = parse_input(&input).map_err(|err| anyhow!(err))?;
    ensure!(
        parsed.struct_attrs.crate_path == Some(parse_quote!(deps::keypath_config)),
        "expected crate override"
    );
    let attrs: Vec<&FieldAttrs> = parsed.fields.iter().map(|field| &field.attrs).collect();
    ensure!(attrs.len() == 5, "expected 5 fields, got {}", attrs.len());
    ensure!(
        attrs.first().and_then(|a| a.key.as_ref()).map(syn::LitStr::value).as_deref()
            == Some("host"),
        "expected key override"
    );
    ensure!(
        attrs.get(1).and_then(|a| a.tag.as_ref()).map(syn::LitStr::value).as_deref()
            == Some("val=port,required"),
        "expected raw tag"
    );
    ensure!(attrs.get(2).is_some_and(|a| a.skip), "expected skip");
    ensure!(attrs.get(3).is_some_and(|a| a.flatten), "expected flatten");
    ensure!(attrs.get(4).is_some_and(|a| a.nested), "expected nested");
    Ok(())
}

#[test]
fn strips_raw_identifier_prefixes() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Demo {
            r#type: String,
        }
    };
    let parsed = parse_input(&input).map_err(|err| anyhow!(err))?;
    let name = parsed.fields.first().map(|field| field.name.as_str());
    ensure!(name == Some("type"), "unexpected name {name:?}");
    Ok(())
}

#[rstest]
#[case::key_and_tag(parse_quote! { struct S { #[bind(key = "a", tag = "val=b")] f: String } })]
#[case::skip_and_key(parse_quote! { struct S { #[bind(skip, key = "a")] f: String } })]
#[case::flatten_and_key(parse_quote! { struct S { #[bind(flatten, key = "a")] f: Inner } })]
#[case::flatten_and_nested(parse_quote! { struct S { #[bind(flatten, nested)] f: Inner } })]
#[case::unknown_key(parse_quote! { struct S { #[bind(rename = "a")] f: String } })]
#[case::non_string_key(parse_quote! { struct S { #[bind(key = 1)] f: String } })]
#[case::unknown_struct_attr(parse_quote! { #[bind(prefix = "a")] struct S { f: String } })]
#[case::tuple_struct(parse_quote! { struct S(String); })]
#[case::unit_struct(parse_quote! { struct S; })]
#[case::enumeration(parse_quote! { enum E { A } })]
fn rejects_invalid_input(#[case] input: DeriveInput) {
    assert!(parse_input(&input).is_err());
}

#[test]
fn other_attributes_are_ignored() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[derive(Debug)]
        #[serde(default)]
        struct Demo {
            #[serde(rename = "x")]
            field: String,
        }
    };
    let parsed = parse_input(&input).map_err(|err| anyhow!(err))?;
    ensure!(parsed.struct_attrs.crate_path.is_none());
    ensure!(parsed.fields.iter().all(|field| field.attrs.key.is_none()));
    Ok(())
}
