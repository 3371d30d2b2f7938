use std::fs;
use std::sync::{Mutex, MutexGuard, PoisonError};

use enumdoc::{
    document_enum, document_member, extract, extract_module, extract_module_file,
    extract_with_options, set_interactive, EnumBuilder, EnumDef, Error, ExtractOptions,
};

// document_enum and document_member consult a process-wide flag; tests that
// touch it take this lock so they cannot observe each other's setting.
static INTERACTIVE_LOCK: Mutex<()> = Mutex::new(());

fn lock_interactive() -> MutexGuard<'static, ()> {
    INTERACTIVE_LOCK
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

const PEOPLE_SOURCE: &str = r#"
class People(int, Enum):
    """
    An enumeration of people.
    """

    Bob = bob = 1  # noqa  # doc: A person called Bob  # doc: another doc  # isort: ignore
    Alice = 2  # doc: A person called Alice
    Carol = 3
    """
    A person called Carol.

    This is a multiline docstring.
    """
    #: A person called Dennis
    Dennis = 4

    @classmethod
    def iter_values(cls):
        """
        Iterate over the values of the enumeration.
        """
        return iter(cls)
"#;

fn people() -> EnumDef {
    EnumBuilder::new("People")
        .int_backed()
        .member("Bob", 1)
        .member("bob", 1)
        .member("Alice", 2)
        .member("Carol", 3)
        .member("Dennis", 4)
        .build()
        .unwrap()
}

#[test]
fn test_people_member_docstrings() {
    let table = extract(PEOPLE_SOURCE).unwrap();

    assert_eq!(table.doc("Bob"), Some("A person called Bob"));
    assert_eq!(table.doc("bob"), Some("A person called Bob"));
    assert_eq!(table.doc("Alice"), Some("A person called Alice"));
    assert_eq!(
        table.doc("Carol"),
        Some("A person called Carol.\n\nThis is a multiline docstring.")
    );
    assert_eq!(table.doc("Dennis"), Some("A person called Dennis"));
    assert_eq!(table.len(), 5);
}

#[test]
fn test_people_class_doc_and_methods() {
    let table = extract(PEOPLE_SOURCE).unwrap();

    assert_eq!(table.name(), "People");
    assert_eq!(table.bases(), ["int", "Enum"]);
    assert_eq!(table.class_doc(), Some("An enumeration of people."));

    assert_eq!(table.methods().len(), 1);
    let method = &table.methods()[0];
    assert_eq!(method.name, "iter_values");
    assert_eq!(method.signature, "(cls)");
    assert_eq!(
        method.doc.as_deref(),
        Some("Iterate over the values of the enumeration.")
    );
}

#[test]
fn test_member_docs_preserve_source_order() {
    let table = extract(PEOPLE_SOURCE).unwrap();
    let names: Vec<&str> = table.member_docs().map(|(name, _)| name).collect();
    assert_eq!(names, ["Bob", "bob", "Alice", "Carol", "Dennis"]);
}

#[test]
fn test_chained_assignment_shares_docstring() {
    let table = extract(
        r#"
class MyEnum(str, Enum):
    a_value = b_value = "a value"  # doc: Docstring
"#,
    )
    .unwrap();

    assert_eq!(table.doc("a_value"), Some("Docstring"));
    assert_eq!(table.doc("b_value"), Some("Docstring"));
}

#[test]
fn test_following_literal_beats_trailing_comment() {
    let table = extract(
        r#"
class ModeOfTransport(Enum):
    feeder = 1  # doc: A feeder vessel
    """
    A vessel that transports containers between ports.
    """
    deep_sea_vessel = 2
"#,
    )
    .unwrap();

    assert_eq!(
        table.doc("feeder"),
        Some("A vessel that transports containers between ports.")
    );
    assert_eq!(table.doc("deep_sea_vessel"), None);

    assert_eq!(table.warnings().len(), 1);
    let warning = &table.warnings()[0];
    assert_eq!(warning.member, "feeder");
    assert_eq!(
        warning.candidates,
        vec![
            "A vessel that transports containers between ports.",
            "A feeder vessel",
        ]
    );
    assert!(warning.to_string().contains("feeder"));
}

#[test]
fn test_sphinx_block_beats_everything() {
    let table = extract(
        r#"
class Priority(Enum):
    #: From the comment block
    first = 1  # doc: From the trailing comment
    """From the following literal"""
    second = 2
"#,
    )
    .unwrap();

    assert_eq!(table.doc("first"), Some("From the comment block"));
    let warning = &table.warnings()[0];
    assert_eq!(
        warning.candidates,
        vec![
            "From the comment block",
            "From the following literal",
            "From the trailing comment",
        ]
    );
}

#[test]
fn test_detached_sphinx_block_is_ignored() {
    let table = extract(
        r#"
class People(Enum):
    #: A person called Dennis

    Dennis = 4
"#,
    )
    .unwrap();
    assert_eq!(table.doc("Dennis"), None);
    assert!(table.is_empty());
}

#[test]
fn test_document_enum_binds_members_and_aliases() {
    let _guard = lock_interactive();
    set_interactive(true);

    let mut def = people();
    let table = document_enum(&mut def, PEOPLE_SOURCE).unwrap();

    assert_eq!(def.doc(), Some("An enumeration of people."));
    assert_eq!(def.get("Bob").unwrap().doc(), Some("A person called Bob"));
    assert_eq!(def.get("bob").unwrap().doc(), Some("A person called Bob"));
    assert_eq!(
        def.get("Alice").unwrap().doc(),
        Some("A person called Alice")
    );
    assert_eq!(def.get("Dennis").unwrap().doc(), Some("A person called Dennis"));
    assert_eq!(table.len(), 5);
}

#[test]
fn test_document_enum_alias_updates_canonical() {
    let _guard = lock_interactive();
    set_interactive(true);

    let mut def = EnumBuilder::new("Numbers")
        .int_backed()
        .member("One", 1)
        .member("Uno", 1)
        .build()
        .unwrap();

    // only the alias is documented in the source
    document_enum(
        &mut def,
        "class Numbers(Enum):\n    Uno = 1  # doc: The first number\n",
    )
    .unwrap();

    assert_eq!(def.get("Uno").unwrap().doc(), Some("The first number"));
    assert_eq!(def.get("One").unwrap().doc(), Some("The first number"));
}

#[test]
fn test_document_enum_not_interactive_is_a_no_op() {
    let _guard = lock_interactive();
    set_interactive(false);

    let mut def = people();
    let table = document_enum(&mut def, PEOPLE_SOURCE).unwrap();

    assert!(table.is_empty());
    assert_eq!(def.doc(), None);
    assert_eq!(def.get("Bob").unwrap().doc(), None);

    set_interactive(true);
}

#[test]
fn test_document_enum_rejects_mismatched_class() {
    let _guard = lock_interactive();
    set_interactive(true);

    let mut def = people();
    let err = document_enum(&mut def, "class Animals(Enum):\n    Cat = 1\n").unwrap_err();
    match err {
        Error::ClassMismatch { expected, found } => {
            assert_eq!(expected, "People");
            assert_eq!(found, "Animals");
        }
        other => panic!("expected a class mismatch, got {other:?}"),
    }
}

#[test]
fn test_document_enum_is_idempotent() {
    let _guard = lock_interactive();
    set_interactive(true);

    let mut def = people();
    document_enum(&mut def, PEOPLE_SOURCE).unwrap();
    let first: Vec<Option<String>> = def.iter().map(|m| m.doc().map(String::from)).collect();

    document_enum(&mut def, PEOPLE_SOURCE).unwrap();
    let second: Vec<Option<String>> = def.iter().map(|m| m.doc().map(String::from)).collect();

    assert_eq!(first, second);
}

#[test]
fn test_document_member_binds_one_member() {
    let _guard = lock_interactive();
    set_interactive(true);

    let mut def = people();
    let doc = document_member(&mut def, "Alice", PEOPLE_SOURCE).unwrap();

    assert_eq!(doc.as_deref(), Some("A person called Alice"));
    assert_eq!(def.get("Alice").unwrap().doc(), Some("A person called Alice"));
    // the others stay untouched
    assert_eq!(def.get("Bob").unwrap().doc(), None);
}

#[test]
fn test_document_member_checks_name_before_the_gate() {
    let _guard = lock_interactive();
    set_interactive(false);

    let mut def = people();
    let err = document_member(&mut def, "Ghost", PEOPLE_SOURCE).unwrap_err();
    match err {
        Error::UnknownMember { member, enum_name } => {
            assert_eq!(member, "Ghost");
            assert_eq!(enum_name, "People");
        }
        other => panic!("expected an unknown member error, got {other:?}"),
    }

    set_interactive(true);
}

#[test]
fn test_document_member_without_docstring_binds_nothing() {
    let _guard = lock_interactive();
    set_interactive(true);

    let mut def = people();
    let source = "class People(Enum):\n    Bob = 1\n";
    let doc = document_member(&mut def, "Bob", source).unwrap();
    assert_eq!(doc, None);
    assert_eq!(def.get("Bob").unwrap().doc(), None);
}

#[test]
fn test_custom_enum_base_is_recognized() {
    let source = "class Fruit(ChoiceType):\n    APPLE = 1  # doc: Keeps doctors away.\n";

    let err = extract(source).unwrap_err();
    assert!(matches!(err, Error::NotAnEnum { .. }));

    let options = ExtractOptions::new().with_enum_base("myapp.fields.ChoiceType");
    let table = extract_with_options(source, options).unwrap();
    assert_eq!(table.doc("APPLE"), Some("Keeps doctors away."));
}

#[test]
fn test_allow_any_class_skips_the_base_screen() {
    let source = "class Plain:\n    X = 1  # doc: Found anyway.\n";
    let options = ExtractOptions::new().allow_any_class();
    let table = extract_with_options(source, options).unwrap();
    assert_eq!(table.doc("X"), Some("Found anyway."));
    assert!(table.bases().is_empty());
}

#[test]
fn test_dotted_base_matches_by_last_segment() {
    let table = extract("class Color(enum.Enum):\n    RED = 1  # doc: Fire.\n").unwrap();
    assert_eq!(table.doc("RED"), Some("Fire."));
}

#[test]
fn test_extract_module_collects_only_enums() {
    let source = r#"
import enum

GLOBAL = "not a class"

class Helper:
    def assist(self):
        pass

class Color(Enum):
    RED = 1  # doc: The color of fire.

class Size(IntEnum):
    """Sizes of things."""

    SMALL = 1  # doc: Fits in a pocket.
    LARGE = 2  # doc: Needs both hands.
"#;
    let tables = extract_module(source).unwrap();
    let names: Vec<&str> = tables.iter().map(|t| t.name()).collect();
    assert_eq!(names, ["Color", "Size"]);
    assert_eq!(tables[1].class_doc(), Some("Sizes of things."));
    assert_eq!(tables[1].len(), 2);
}

#[test]
fn test_extract_module_file_round_trip() {
    let path = std::env::temp_dir().join("enumdoc_module_scan_test.py");
    fs::write(&path, "class Color(Enum):\n    RED = 1  # doc: Fire.\n").unwrap();

    let tables = extract_module_file(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].doc("RED"), Some("Fire."));
}

#[test]
fn test_extract_module_file_missing_path() {
    let err = extract_module_file("/nonexistent/enumdoc_missing.py").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_rejects_non_enum_subjects() {
    let err = extract("def main():\n    pass\n").unwrap_err();
    assert!(err.to_string().contains("a function definition"));

    let err = extract("x = 42\n").unwrap_err();
    assert!(err.to_string().contains("expected an 'Enum' class"));

    let err = extract("class Plain(object):\n    X = 1\n").unwrap_err();
    assert!(err.to_string().contains("class Plain(object)"));
}

#[test]
fn test_unterminated_string_reports_line() {
    let err = extract("class A(Enum):\n    X = 'oops\n").unwrap_err();
    match err {
        Error::Syntax { line, .. } => assert_eq!(line, 2),
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

#[test]
fn test_indented_source_is_dedented_first() {
    let source = "    class Inner(Enum):\n        A = 1  # doc: Still found.\n";
    let table = extract(source).unwrap();
    assert_eq!(table.doc("A"), Some("Still found."));
}

#[test]
fn test_decorated_class_is_accepted() {
    let source = "@document_enum\n@functools.cache\nclass A(Enum):\n    X = 1  # doc: Doc.\n";
    let table = extract(source).unwrap();
    assert_eq!(table.doc("X"), Some("Doc."));
}

#[test]
fn test_annotated_member_assignment() {
    let table = extract("class A(Enum):\n    X: int = 1  # doc: Annotated.\n").unwrap();
    assert_eq!(table.doc("X"), Some("Annotated."));
}

#[test]
fn test_private_names_are_skipped() {
    let source = "class A(Enum):\n    _ignore_ = 'x'  # doc: Not a member.\n    X = 1  # doc: Real.\n";
    let table = extract(source).unwrap();
    assert_eq!(table.doc("_ignore_"), None);
    assert_eq!(table.doc("X"), Some("Real."));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_unicode_docstrings_survive() {
    let source = "class A(Enum):\n    X = 1  # doc: Prix en \u{20ac}, tr\u{e8}s cher\n";
    let table = extract(source).unwrap();
    assert_eq!(table.doc("X"), Some("Prix en \u{20ac}, tr\u{e8}s cher"));
}

#[test]
fn test_bracket_continuation_keeps_comment() {
    let source = "class A(Enum):\n    X = (  # doc: Spans lines.\n        1,\n    )\n";
    let table = extract(source).unwrap();
    assert_eq!(table.doc("X"), Some("Spans lines."));
}

#[test]
fn test_nested_class_members_are_not_collected() {
    let source = r#"
class Outer(Enum):
    A = 1  # doc: Outer member.

    class Inner:
        B = 2  # doc: Inner attribute.
"#;
    let table = extract(source).unwrap();
    assert_eq!(table.doc("A"), Some("Outer member."));
    assert_eq!(table.doc("B"), None);
}
