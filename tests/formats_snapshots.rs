//! Output format snapshots

use lexpr::lexpr::formats::FormatRegistry;
use lexpr::lexpr::translate;

fn serialize(source: &str, format: &str) -> String {
    let program = translate(source).unwrap();
    FormatRegistry::default().serialize(&program, format).unwrap()
}

#[test]
fn sexpr_program() {
    insta::assert_snapshot!(serialize("x. greater than: y, n *: n - 1 .!, hello world", "sexpr"), @r###"
    (greater-than x y)
    (* n (! (- n 1)))
    (hello-world)
    "###);
}

#[test]
fn treeviz_program() {
    insta::assert_snapshot!(serialize("f: (x) (y)", "treeviz"), @r###"
    ⧉ 1 item
    └─ λ apply
      ├─ ◦ f
      ├─ ◦ x
      └─ ◦ y
    "###);
}

#[test]
fn json_program() {
    insta::assert_snapshot!(serialize("f 1", "json"), @r###"
    {
      "ast": [
        {
          "node": "atom",
          "kind": "identifier",
          "text": "f",
          "range": {
            "span": {
              "start": 0,
              "end": 1
            },
            "start": {
              "line": 1,
              "column": 1
            },
            "end": {
              "line": 1,
              "column": 2
            }
          }
        },
        {
          "node": "atom",
          "kind": "number",
          "text": "1",
          "range": {
            "span": {
              "start": 2,
              "end": 3
            },
            "start": {
              "line": 1,
              "column": 3
            },
            "end": {
              "line": 1,
              "column": 4
            }
          }
        },
        {
          "node": "application",
          "head": 0,
          "args": [
            1
          ],
          "head_kind": "genuine",
          "range": {
            "span": {
              "start": 0,
              "end": 3
            },
            "start": {
              "line": 1,
              "column": 1
            },
            "end": {
              "line": 1,
              "column": 4
            }
          }
        }
      ],
      "items": [
        2
      ]
    }
    "###);
}

#[test]
fn unknown_format() {
    let program = translate("x").unwrap();
    let err = FormatRegistry::default().serialize(&program, "yaml").unwrap_err();
    assert_eq!(err.to_string(), "format 'yaml' not found");
}
