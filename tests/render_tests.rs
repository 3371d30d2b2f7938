use enumdoc::{
    autodoc, autodoc_with_options, EnumBuilder, EnumDef, Error, ExtractOptions, MemberOrder,
    RenderOptions,
};

const PEOPLE_SOURCE: &str = r#"
class People(int, Enum):
    """
    An enumeration of people.
    """

    Bob = bob = 1  # doc: A person called Bob
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
fn test_autodoc_full_document() {
    let mut def = people();
    let text = autodoc(&mut def, PEOPLE_SOURCE).unwrap();
    println!("Rendered document:\n{}", text);

    let expected = "\
.. enum:: People(value)

   An enumeration of people.

   :Member Type: int

   Valid values are as follows:

   .. enum:member:: People.Bob

      :value: 1

      A person called Bob

   .. enum:member:: People.Alice

      :value: 2

      A person called Alice

   .. enum:member:: People.Carol

      :value: 3

      A person called Carol.

      This is a multiline docstring.

   .. enum:member:: People.Dennis

      :value: 4

      A person called Dennis

   The enumeration and its members also have the following methods:

   .. method:: People.iter_values(cls)

      Iterate over the values of the enumeration.
";
    assert_eq!(text, expected);
}

#[test]
fn test_autodoc_binds_the_definition_too() {
    let mut def = people();
    autodoc(&mut def, PEOPLE_SOURCE).unwrap();
    assert_eq!(def.doc(), Some("An enumeration of people."));
    assert_eq!(def.get("Carol").unwrap().doc().unwrap_or_default().lines().next(),
        Some("A person called Carol."));
}

#[test]
fn test_autodoc_without_methods_omits_the_listing() {
    let source = "class Compass(Enum):\n    NORTH = 1  # doc: Up on most maps.\n";
    let mut def = EnumBuilder::new("Compass")
        .int_backed()
        .member("NORTH", 1)
        .build()
        .unwrap();
    let text = autodoc(&mut def, source).unwrap();
    assert!(!text.contains("following methods"));
    assert!(text.contains("Up on most maps."));
}

#[test]
fn test_autodoc_undocumented_members_render_bare() {
    let source = "class Compass(Enum):\n    NORTH = 1  # doc: Documented.\n    SOUTH = 2\n";
    let mut def = EnumBuilder::new("Compass")
        .int_backed()
        .member("NORTH", 1)
        .member("SOUTH", 2)
        .build()
        .unwrap();
    let text = autodoc(&mut def, source).unwrap();
    println!("Partially documented:\n{}", text);

    assert!(text.contains(".. enum:member:: Compass.SOUTH\n\n      :value: 2"));
    assert!(text.contains("Documented."));
}

#[test]
fn test_autodoc_flag_directives() {
    let source = concat!(
        "class StatusFlags(IntFlag):\n",
        "    \"\"\"Process status bits.\"\"\"\n",
        "    Running = 1  # doc: The process is live.\n",
        "    Stopped = 2  # doc: The process has exited.\n",
        "    Error = 4  # doc: The process failed.\n",
    );
    let mut def = EnumBuilder::new("StatusFlags")
        .int_backed()
        .flag()
        .member("Running", 1)
        .member("Stopped", 2)
        .member("Error", 4)
        .build()
        .unwrap();
    let text = autodoc(&mut def, source).unwrap();
    println!("Flag document:\n{}", text);

    assert!(text.starts_with(".. flag:: StatusFlags(value)"));
    assert!(text.contains(".. flag:member:: StatusFlags.Running"));
    assert!(text.contains("The process failed."));

    // the bound definition decomposes composites as before
    assert_eq!(def.decompose(3).unwrap().to_string(), "Stopped|Running");
}

#[test]
fn test_autodoc_with_render_options() {
    let mut def = people();
    let options = RenderOptions::new()
        .hide_values()
        .with_member_order(MemberOrder::Alphabetical);
    let text = autodoc_with_options(&mut def, PEOPLE_SOURCE, ExtractOptions::new(), options)
        .unwrap();

    assert!(!text.contains(":value:"));
    let alice = text.find("People.Alice").unwrap();
    let bob = text.find("People.Bob").unwrap();
    let carol = text.find("People.Carol").unwrap();
    assert!(alice < bob && bob < carol);
}

#[test]
fn test_autodoc_with_custom_enum_base() {
    let source = "class Fruit(ChoiceType):\n    APPLE = 1  # doc: Keeps doctors away.\n";
    let mut def = EnumBuilder::new("Fruit")
        .int_backed()
        .member("APPLE", 1)
        .build()
        .unwrap();

    let err = autodoc(&mut def, source).unwrap_err();
    assert!(matches!(err, Error::NotAnEnum { .. }));

    let extract_options = ExtractOptions::new().with_enum_base("ChoiceType");
    let text =
        autodoc_with_options(&mut def, source, extract_options, RenderOptions::new()).unwrap();
    assert!(text.contains("Keeps doctors away."));
}

#[test]
fn test_autodoc_propagates_class_mismatch() {
    let mut def = people();
    let err = autodoc(&mut def, "class Animals(Enum):\n    Cat = 1\n").unwrap_err();
    assert!(matches!(err, Error::ClassMismatch { .. }));
}

#[test]
fn test_autodoc_twice_accumulates_nothing() {
    let mut def = people();
    let first = autodoc(&mut def, PEOPLE_SOURCE).unwrap();
    let second = autodoc(&mut def, PEOPLE_SOURCE).unwrap();
    assert_eq!(first, second);
}
