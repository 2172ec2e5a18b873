//! Integration tests for pretty dumps

use serde_json::json;

use crate::helpers::{product, run_volant, volant};
use volant::pretty::pformat;
use volant::Value;

const DUMP: &str = concat!(
    "  {'a': False,\n",
    "   'b': 1_502_990_100,\n",
    "   'c': ['critter', 'fritter', 'glitter', 'jitter', 'litter', 'twitter'],\n",
    "   'd': 'aaa aab aac aba abb abc aca acb acc baa bab bac bba bbb bbc bca bcb '\n",
    "        'bcc caa cab cac cba cbb cbc cca ccb ccc',\n",
    "   'e': 2.718,\n",
    "   'f': {'g': {'j': 'aa ab ac ad ae ba bb bc bd be ca cb cc cd ce da db dc '\n",
    "                    'dd de ea eb ec ed ee',\n",
    "               'k': 'aa ab ac ad ae ba bb bc bd be ca cb cc cd ce da db dc '\n",
    "                    'dd de ea eb ec ed ee',\n",
    "               'l': 'aa ab ac ad ae ba bb bc bd be ca cb cc cd ce da db dc '\n",
    "                    'dd de ea eb ec ed ee'},\n",
    "         'h': {'j': 'aa ab ac ad ae ba bb bc bd be ca cb cc cd ce da db dc '\n",
    "                    'dd de ea eb ec ed ee',\n",
    "               'k': 'aa ab ac ad ae ba bb bc bd be ca cb cc cd ce da db dc '\n",
    "                    'dd de ea eb ec ed ee',\n",
    "               'l': 'aa ab ac ad ae ba bb bc bd be ca cb cc cd ce da db dc '\n",
    "                    'dd de ea eb ec ed ee'},\n",
    "         'i': {'j': 'aa ab ac ad ae ba bb bc bd be ca cb cc cd ce da db dc '\n",
    "                    'dd de ea eb ec ed ee',\n",
    "               'k': 'aa ab ac ad ae ba bb bc bd be ca cb cc cd ce da db dc '\n",
    "                    'dd de ea eb ec ed ee',\n",
    "               'l': 'aa ab ac ad ae ba bb bc bd be ca cb cc cd ce da db dc '\n",
    "                    'dd de ea eb ec ed ee'}},\n",
    "   'x': 1,\n",
    "   'y': 2,\n",
    "   'z': 3}\n",
);

/// Nested mapping with keys deliberately out of order.
fn reference_document() -> serde_json::Value {
    let leaf = product("abcde", 2);
    let branch = json!({ "l": leaf, "k": leaf, "j": leaf });
    json!({
        "z": 3,
        "y": 2,
        "x": 1,
        "a": false,
        "b": 1_502_990_100_u64,
        "c": ["critter", "fritter", "glitter", "jitter", "litter", "twitter"],
        "d": product("abc", 3),
        "e": 2.718,
        "f": { "i": branch, "h": branch, "g": branch },
    })
}

#[test]
fn dump_matches_reference_layout() {
    let document = reference_document().to_string();
    let (stdout, stderr, exit_code) = run_volant(&["dump", document.as_str()]);
    assert_eq!(exit_code, 0, "dump failed: {}", stderr);
    assert_eq!(stdout, DUMP);
}

#[test]
fn dump_reads_stdin() {
    volant()
        .arg("dump")
        .write_stdin(reference_document().to_string())
        .assert()
        .success()
        .stdout(DUMP);
}

#[test]
fn pformat_of_reference_document() {
    let value = Value::from(reference_document());
    insta::assert_snapshot!("pformat_reference", pformat(&value, 76));
}

#[test]
fn dump_width_flag_rewraps() {
    let (stdout, _stderr, exit_code) =
        run_volant(&["--width", "20", "dump", r#"["critter", "fritter", "glitter"]"#]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "  ['critter',\n   'fritter',\n   'glitter']\n");
}

#[test]
fn dump_of_scalars() {
    for (json, expected) in [
        ("null", "  None\n"),
        ("true", "  True\n"),
        ("1000000", "  1_000_000\n"),
        ("2.5e20", "  2.5e+20\n"),
        (r#""it's""#, "  \"it's\"\n"),
    ] {
        let (stdout, _stderr, exit_code) = run_volant(&["dump", json]);
        assert_eq!(exit_code, 0);
        assert_eq!(stdout, expected, "dump {}", json);
    }
}

#[test]
fn dump_rejects_invalid_json() {
    let (stdout, stderr, exit_code) = run_volant(&["dump", "{not json"]);
    assert_eq!(exit_code, 1);
    assert_eq!(stdout, "");
    assert!(stderr.contains("Failed to parse JSON document"));
}
