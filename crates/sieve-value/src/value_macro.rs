/// A declarative macro for building value trees, inspired by serde_json's `json!` macro.
///
/// # Syntax
///
/// - `null`: the null value
/// - `[a, b, ...]`: an array
/// - `(a, b, ...)`: a tuple
/// - `{ key: value, ... }`: a map; keys are literals converted with `ObjectKey::from`
/// - any other expression is converted with `Value::from`
///
/// # Examples
///
/// ```
/// use sieve_value::{value, Value};
///
/// let v = value!({
///     "name": "Alice",
///     "tags": ["a", "b"],
///     "point": (1, -2),
///     "manager": null,
/// });
/// assert_eq!(v.get("name"), Some(&Value::from("Alice")));
/// ```
#[macro_export]
macro_rules! value {
    // ========================================================================
    // Sequence elements (@seq)
    //
    // Nested literals are matched before the generic expression arm so that
    // `[..]`, `(..)` and `{..}` recurse instead of going through `Value::from`.
    // ========================================================================
    (@seq $v:ident;) => {};

    (@seq $v:ident; null $(, $($tail:tt)*)?) => {{
        $v.push($crate::value::Value::Null);
        $($crate::value!(@seq $v; $($tail)*);)?
    }};

    (@seq $v:ident; [ $($inner:tt)* ] $(, $($tail:tt)*)?) => {{
        $v.push($crate::value!([ $($inner)* ]));
        $($crate::value!(@seq $v; $($tail)*);)?
    }};

    (@seq $v:ident; ( $($inner:tt)* ) $(, $($tail:tt)*)?) => {{
        $v.push($crate::value!(( $($inner)* )));
        $($crate::value!(@seq $v; $($tail)*);)?
    }};

    (@seq $v:ident; { $($inner:tt)* } $(, $($tail:tt)*)?) => {{
        $v.push($crate::value!({ $($inner)* }));
        $($crate::value!(@seq $v; $($tail)*);)?
    }};

    (@seq $v:ident; $item:expr $(, $($tail:tt)*)?) => {{
        $v.push($crate::value::Value::from($item));
        $($crate::value!(@seq $v; $($tail)*);)?
    }};

    // ========================================================================
    // Map entries (@map)
    // ========================================================================
    (@map $m:ident;) => {};

    (@map $m:ident; $key:literal : null $(, $($tail:tt)*)?) => {{
        $m.insert($crate::value::ObjectKey::from($key), $crate::value::Value::Null);
        $($crate::value!(@map $m; $($tail)*);)?
    }};

    (@map $m:ident; $key:literal : [ $($inner:tt)* ] $(, $($tail:tt)*)?) => {{
        $m.insert($crate::value::ObjectKey::from($key), $crate::value!([ $($inner)* ]));
        $($crate::value!(@map $m; $($tail)*);)?
    }};

    (@map $m:ident; $key:literal : ( $($inner:tt)* ) $(, $($tail:tt)*)?) => {{
        $m.insert($crate::value::ObjectKey::from($key), $crate::value!(( $($inner)* )));
        $($crate::value!(@map $m; $($tail)*);)?
    }};

    (@map $m:ident; $key:literal : { $($inner:tt)* } $(, $($tail:tt)*)?) => {{
        $m.insert($crate::value::ObjectKey::from($key), $crate::value!({ $($inner)* }));
        $($crate::value!(@map $m; $($tail)*);)?
    }};

    (@map $m:ident; $key:literal : $item:expr $(, $($tail:tt)*)?) => {{
        $m.insert($crate::value::ObjectKey::from($key), $crate::value::Value::from($item));
        $($crate::value!(@map $m; $($tail)*);)?
    }};

    // ========================================================================
    // Entry points
    // ========================================================================
    (null) => {
        $crate::value::Value::Null
    };

    ([ $($items:tt)* ]) => {{
        #[allow(unused_mut)]
        let mut items = ::std::vec::Vec::<$crate::value::Value>::new();
        $crate::value!(@seq items; $($items)*);
        $crate::value::Value::Array(items)
    }};

    (( $($items:tt)* )) => {{
        #[allow(unused_mut)]
        let mut items = ::std::vec::Vec::<$crate::value::Value>::new();
        $crate::value!(@seq items; $($items)*);
        $crate::value::Value::Tuple($crate::value::Tuple(items))
    }};

    ({ $($entries:tt)* }) => {{
        #[allow(unused_mut)]
        let mut map = $crate::map::Map::<$crate::value::ObjectKey, $crate::value::Value>::new();
        $crate::value!(@map map; $($entries)*);
        $crate::value::Value::Map(map)
    }};

    ($other:expr) => {
        $crate::value::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::map::Map;
    use crate::value::{ObjectKey, Tuple, Value};

    #[test]
    fn test_scalars() {
        assert_eq!(value!(null), Value::Null);
        assert_eq!(value!(1), Value::from(1));
        assert_eq!(value!(-1), Value::from(-1));
        assert_eq!(value!("a"), Value::from("a"));
        assert_eq!(value!(true), Value::Bool(true));
    }

    #[test]
    fn test_sequences() {
        assert_eq!(value!([]), Value::Array(vec![]));
        assert_eq!(
            value!([1, "2", null]),
            Value::Array(vec![1.into(), "2".into(), Value::Null])
        );
        assert_eq!(
            value!((1, -2,)),
            Value::Tuple(Tuple(vec![1.into(), (-2).into()]))
        );
        assert_eq!(
            value!([[1], (2)]),
            Value::Array(vec![
                Value::Array(vec![1.into()]),
                Value::Tuple(Tuple(vec![2.into()])),
            ])
        );
    }

    #[test]
    fn test_nested_map() {
        let v = value!({
            "a": 1,
            "b": { "c": [true, false] },
            "d": null,
            1: "numeric key",
        });
        let mut inner = Map::new();
        inner.insert(
            ObjectKey::from("c"),
            Value::Array(vec![true.into(), false.into()]),
        );
        let mut expected = Map::new();
        expected.insert(ObjectKey::from("a"), Value::from(1));
        expected.insert(ObjectKey::from("b"), Value::Map(inner));
        expected.insert(ObjectKey::from("d"), Value::Null);
        expected.insert(ObjectKey::from(1), Value::from("numeric key"));
        assert_eq!(v, Value::Map(expected));
    }

    #[test]
    fn test_expression_values() {
        let name = String::from("Bob");
        let v = value!({ "name": name.clone(), "len": name.len() });
        assert_eq!(v.get("name"), Some(&Value::from("Bob")));
        assert_eq!(v.get("len"), Some(&Value::from(3usize)));
    }
}
