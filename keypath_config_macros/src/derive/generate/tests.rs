//! Tests for the generated `Bind` implementation.

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use syn::{DeriveInput, parse_quote};

use crate::derive::expand;

fn expand_to_string(input: &DeriveInput) -> Result<String> {
    let tokens = expand(input).map_err(|err| anyhow!(err))?;
    Ok(tokens.to_string())
}

#[test]
fn emits_descriptor_table_in_declaration_order() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Demo {
            #[bind(key = "host")]
            address: String,
            replicas: Vec<u8>,
            database: Database,
            #[bind(flatten)]
            common: Common,
            label: Option<String>,
        }
    };
    let output = expand_to_string(&input)?;
    let order = [
        "leaf (\"address\"",
        "leaf (\"replicas\"",
        "record (\"database\")",
        "flatten (\"common\")",
        "leaf (\"label\"",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|needle| {
            output
                .find(needle)
                .ok_or_else(|| anyhow!("missing `{needle}` in {output}"))
        })
        .collect::<Result<_>>()?;
    ensure!(positions.is_sorted(), "descriptors out of order: {output}");
    ensure!(output.contains("FieldAnnotation :: Key (\"host\")"));
    ensure!(output.contains("ValueKind :: List (< u8 as keypath_config :: ScalarLeaf > :: KIND)"));
    ensure!(output.contains("ValueKind :: Unsupported (\"Option<String>\")"));
    Ok(())
}

#[test]
fn accessors_skip_unsupported_and_skipped_fields() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Demo {
            name: String,
            #[bind(skip)]
            cache: Cache,
            label: Option<String>,
            port: u16,
        }
    };
    let output = expand_to_string(&input)?;
    ensure!(output.contains("0 => :: core :: option :: Option :: Some (& mut self . name)"));
    ensure!(output.contains("3 => :: core :: option :: Option :: Some (& mut self . port)"));
    ensure!(!output.contains("self . cache"), "skipped field exposed: {output}");
    ensure!(!output.contains("self . label"), "unsupported field exposed: {output}");
    ensure!(output.contains("FieldAnnotation :: Skip"));
    Ok(())
}

#[rstest]
#[case::default(parse_quote! { struct S { f: String } }, "impl keypath_config :: Bind for S")]
#[case::aliased(
    parse_quote! { #[bind(crate = "cfg")] struct S { f: String } },
    "impl cfg :: Bind for S"
)]
#[case::generic(
    parse_quote! { struct S<T: Bind> { inner: T } },
    "impl < T : Bind > keypath_config :: Bind for S < T >"
)]
fn honours_crate_path_and_generics(
    #[case] input: DeriveInput,
    #[case] expected: &str,
) -> Result<()> {
    let output = expand_to_string(&input)?;
    ensure!(output.contains(expected), "expected `{expected}` in {output}");
    Ok(())
}
