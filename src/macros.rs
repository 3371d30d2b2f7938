/// Declares an enumeration and returns the [`EnumBuilder`](crate::EnumBuilder)
/// holding it, ready for further configuration.
///
/// Members either carry explicit values or none at all; a valueless list is
/// auto-numbered from 1 in declaration order.
///
/// ```rust
/// use enumdoc::enum_def;
///
/// let season = enum_def!(Season {
///     SPRING = 1,
///     SUMMER = 2,
/// })
/// .int_backed()
/// .build()
/// .unwrap();
///
/// assert_eq!(season.len(), 2);
/// ```
#[macro_export]
macro_rules! enum_def {
    // Handle members with explicit values
    ($name:ident { $($member:ident = $value:expr),+ $(,)? }) => {{
        let mut builder = $crate::EnumBuilder::new(stringify!($name));
        $(
            builder = builder.member(stringify!($member), $value);
        )+
        builder
    }};

    // Handle valueless members, auto-numbered from 1
    ($name:ident { $($member:ident),+ $(,)? }) => {{
        let mut builder = $crate::EnumBuilder::new(stringify!($name)).auto_number();
        $(
            builder = builder.member_auto(stringify!($member));
        )+
        builder
    }};
}

#[cfg(test)]
mod tests {
    use crate::MemberValue;

    #[test]
    fn test_enum_def_macro_explicit_values() {
        let season = enum_def!(Season {
            SPRING = 1,
            SUMMER = 2,
        })
        .int_backed()
        .build()
        .unwrap();

        assert_eq!(season.name(), "Season");
        assert_eq!(season.len(), 2);
        assert_eq!(season.get("SPRING").unwrap().value(), &MemberValue::Int(1));
    }

    #[test]
    fn test_enum_def_macro_auto_numbered() {
        let compass = enum_def!(Compass { NORTH, EAST, SOUTH, WEST })
            .int_backed()
            .build()
            .unwrap();

        assert_eq!(compass.len(), 4);
        assert_eq!(compass.get("NORTH").unwrap().value(), &MemberValue::Int(1));
        assert_eq!(compass.get("WEST").unwrap().value(), &MemberValue::Int(4));
    }

    #[test]
    fn test_enum_def_macro_string_values() {
        let transport = enum_def!(Transport {
            feeder = "feeder",
            breakbulk = "breakbulk",
        })
        .str_backed()
        .build()
        .unwrap();

        assert_eq!(
            transport.get("feeder").unwrap().value().as_str(),
            Some("feeder")
        );
    }

    #[test]
    fn test_enum_def_macro_builder_is_still_open() {
        let flags = enum_def!(Perm {
            READ = 4,
            WRITE = 2,
            EXEC = 1,
        })
        .int_backed()
        .flag()
        .build()
        .unwrap();

        assert!(flags.is_flag());
    }
}
