//! Tests for role inference from declared types.

use super::super::*;
use rstest::rstest;
use syn::{Type, parse_quote};

fn infer_plain(ty: &Type) -> Role {
    role::infer(ty, &FieldAttrs::default())
}

#[rstest]
#[case(parse_quote!(String))]
#[case(parse_quote!(std::string::String))]
#[case(parse_quote!(bool))]
#[case(parse_quote!(u16))]
#[case(parse_quote!(i128))]
#[case(parse_quote!(f32))]
fn scalars_are_leaves(#[case] ty: Type) {
    assert_eq!(infer_plain(&ty), Role::Scalar(ty.clone()));
}

#[rstest]
#[case(parse_quote!(Vec<String>), parse_quote!(String))]
#[case(parse_quote!(std::vec::Vec<u8>), parse_quote!(u8))]
fn scalar_vectors_are_lists(#[case] ty: Type, #[case] element: Type) {
    assert_eq!(infer_plain(&ty), Role::List(element));
}

#[rstest]
#[case(parse_quote!(Option<String>), "Option<String>")]
#[case(parse_quote!(std::collections::HashMap<String, u8>), "std::collections::HashMap<String, u8>")]
#[case(parse_quote!(BTreeMap<String, String>), "BTreeMap<String, String>")]
#[case(parse_quote!(Vec<Vec<u8>>), "Vec<Vec<u8>>")]
#[case(parse_quote!(Vec<Database>), "Vec<Database>")]
#[case(parse_quote!((u8, u8)), "(u8, u8)")]
#[case(parse_quote!([u8; 4]), "[u8;4]")]
#[case(parse_quote!(&'static str), "&'static str")]
#[case(parse_quote!(char), "char")]
#[case(parse_quote!(Box<Database>), "Box<Database>")]
fn unsupported_types_keep_their_spelling(#[case] ty: Type, #[case] rendered: &str) {
    assert_eq!(infer_plain(&ty), Role::Unsupported(rendered.to_owned()));
}

#[rstest]
#[case(parse_quote!(Database))]
#[case(parse_quote!(crate::config::Database))]
#[case(parse_quote!(Wrapper<Database>))]
#[case(parse_quote!(std::path::PathBuf))]
#[case(parse_quote!(Duration))]
fn other_paths_are_records(#[case] ty: Type) {
    assert_eq!(infer_plain(&ty), Role::Record);
}

#[test]
fn attributes_override_inference() {
    let ty: Type = parse_quote!(Port);
    let flatten = FieldAttrs {
        flatten: true,
        ..FieldAttrs::default()
    };
    let nested = FieldAttrs {
        nested: true,
        ..FieldAttrs::default()
    };
    assert_eq!(role::infer(&ty, &flatten), Role::Flatten);
    assert_eq!(role::infer(&parse_quote!(u16), &nested), Role::Record);
}
