use tracing::trace;

use crate::coerce::Coerce;
use crate::error::CookError;
use crate::error::Result;
use crate::template::Template;

/// Interleaves the literal segments of `template` with `substitutions`:
/// `segment[0] + sub[0] + segment[1] + ... + segment[n-1]`.
///
/// Substitutions past `length - 1` are ignored and missing ones cook to the
/// empty string. A template with no segments returns `""` without reading any
/// element or substitution.
pub fn cook<T, S>(template: &T, substitutions: &[S]) -> Result<String>
where
    T: Template + ?Sized,
    S: Coerce,
{
    let result = cook_segments(template, substitutions);
    if let Err(err) = &result {
        trace!("cook failed: {err}");
    }
    result
}

fn cook_segments<T, S>(template: &T, substitutions: &[S]) -> Result<String>
where
    T: Template + ?Sized,
    S: Coerce,
{
    let number_of_substitutions = substitutions.len() as u64;
    template.require_object_coercible()?;
    let literal_segments = template.length()?;
    if literal_segments == 0 {
        trace!("template has no literal segments");
        return Ok(String::new());
    }

    let mut cooked = String::new();
    let mut next_index = 0_u64;
    loop {
        let segment = template
            .element_at(next_index)
            .filter(|segment| !segment.is_undefined())
            .ok_or(CookError::MissingSegment { index: next_index })?;
        segment.append_to(&mut cooked)?;

        if next_index + 1 == literal_segments {
            return Ok(cooked);
        }

        if next_index < number_of_substitutions {
            let substitution = usize::try_from(next_index)
                .ok()
                .and_then(|i| substitutions.get(i));
            if let Some(substitution) = substitution {
                substitution.append_to(&mut cooked)?;
            }
        }

        next_index += 1;
    }
}

/// Cooks a template against any number of substitutions of mixed types.
///
/// ```
/// use string_cooked::cook;
///
/// let cooked = cook!(["a", "b", "c"], 1, "two").unwrap();
/// assert_eq!(cooked, "a1btwoc");
/// ```
#[macro_export]
macro_rules! cook {
    ($template:expr $(, $substitution:expr)* $(,)?) => {
        $crate::cook::<_, &dyn $crate::Coerce>(
            &$template,
            &[$(&$substitution as &dyn $crate::Coerce),*],
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Symbol;
    use crate::value::Value;
    use pretty_assertions::assert_eq;

    #[test]
    fn extra_substitutions_are_ignored() {
        let cooked = cook(&["a", "b"], &[1, 2, 3]).unwrap();
        assert_eq!(cooked, "a1b");
    }

    #[test]
    fn missing_substitutions_cook_to_empty() {
        let cooked = cook(&["a", "b", "c", "d"], &["x"]).unwrap();
        assert_eq!(cooked, "axbcd");
    }

    #[test]
    fn undefined_substitution_cooks_to_its_name() {
        let cooked = cook(&["a", "b"], &[Value::Undefined]).unwrap();
        assert_eq!(cooked, "aundefinedb");
    }

    #[test]
    fn hole_in_segments_fails_at_its_index() {
        let template = Value::Array(vec![Value::from("a"), Value::Undefined, Value::from("c")]);
        let err = cook(&template, &["x", "y"]).unwrap_err();
        assert_eq!(err, CookError::MissingSegment { index: 1 });
    }

    #[test]
    fn null_segment_is_not_missing() {
        let template = Value::Array(vec![Value::Null, Value::from("!")]);
        assert_eq!(cook(&template, &[Value::Null]).unwrap(), "nullnull!");
    }

    #[test]
    fn symbol_past_last_segment_is_never_coerced() {
        let subs = [Value::from(1), Value::Symbol(Symbol::anonymous())];
        assert_eq!(cook(&["a", "b"], &subs).unwrap(), "a1b");
    }

    #[test]
    fn string_template_is_split_into_characters() {
        let cooked = cook("abc", &["-", "+"]).unwrap();
        assert_eq!(cooked, "a-b+c");
    }

    #[test]
    fn macro_mixes_substitution_types() {
        let name = String::from("world");
        let cooked = cook!(vec!["hello ", ", ", "", "!"], name, 42_u8, 1.5).unwrap();
        assert_eq!(cooked, "hello world, 421.5!");
        assert_eq!(cook!(["only"]).unwrap(), "only");
        assert_eq!(cook!(Vec::<String>::new(), "ignored").unwrap(), "");
    }
}
