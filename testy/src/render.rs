//! Diagnostic rendering of values and their types

use std::any;
use std::fmt::Debug;

/// Short name of `T`: every path is reduced to its final segment, generics
/// and references kept (`core::option::Option<alloc::string::String>`
/// becomes `Option<String>`).
pub fn type_name_of<T: ?Sized>() -> String {
    short_type_name(any::type_name::<T>())
}

pub fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut path = String::new();

    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            path.push(c);
        } else {
            flush_path(&mut out, &mut path);
            out.push(c);
        }
    }
    flush_path(&mut out, &mut path);
    out
}

fn flush_path(out: &mut String, path: &mut String) {
    if !path.is_empty() {
        out.push_str(path.rsplit("::").next().unwrap_or(path));
        path.clear();
    }
}

/// Drop leading `&` and `&mut` from a type name
pub fn strip_refs(name: &str) -> &str {
    let mut bare = name;
    loop {
        let stripped = bare.trim_start_matches('&').trim_start_matches("mut ");
        if stripped == bare {
            return bare;
        }
        bare = stripped;
    }
}

/// `Debug` form of a value; strings come out quoted and escaped
pub fn value<T: Debug + ?Sized>(value: &T) -> String {
    format!("{value:?}")
}

/// `<value> (<type>)`, reporting the referent's type for references
pub fn annotated<T: Debug + ?Sized>(v: &T) -> String {
    format!("{} ({})", value(v), strip_refs(&type_name_of::<T>()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Pair {
        x: f32,
        y: f32,
    }

    #[test]
    fn test_short_type_names() {
        assert_eq!(type_name_of::<i32>(), "i32");
        assert_eq!(type_name_of::<String>(), "String");
        assert_eq!(type_name_of::<&str>(), "&str");
        assert_eq!(type_name_of::<Option<String>>(), "Option<String>");
        assert_eq!(type_name_of::<Vec<(u8, bool)>>(), "Vec<(u8, bool)>");
        assert_eq!(type_name_of::<Pair>(), "Pair");
        assert_eq!(type_name_of::<[i64; 3]>(), "[i64; 3]");
    }

    #[test]
    fn test_short_type_name_from_raw_paths() {
        assert_eq!(
            short_type_name("std::collections::hash::map::HashMap<alloc::string::String, u32>"),
            "HashMap<String, u32>"
        );
        assert_eq!(short_type_name("&dyn core::fmt::Debug"), "&dyn Debug");
        assert_eq!(strip_refs("&&mut &str"), "str");
        assert_eq!(strip_refs("Vec<&str>"), "Vec<&str>");
    }

    #[test]
    fn test_annotated_values() {
        assert_eq!(annotated(&1), "1 (i32)");
        assert_eq!(annotated(&true), "true (bool)");
        assert_eq!(annotated("foo\tbar"), "\"foo\\tbar\" (str)");
        assert_eq!(annotated(&"foo".to_string()), "\"foo\" (String)");
        assert_eq!(annotated(&&&7u8), "7 (u8)");
        assert_eq!(annotated(&Pair { x: 1.0, y: 1.5 }), "Pair { x: 1.0, y: 1.5 } (Pair)");
    }
}
