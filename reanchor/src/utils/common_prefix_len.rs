/// Length of the common prefix of `old` and `new`, in items.
pub fn common_prefix_len<T>(old: &[T], new: &[T]) -> usize
where
    T: PartialEq,
{
    old.iter()
        .zip(new.iter())
        .take_while(|(old_item, new_item)| old_item == new_item)
        .count()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn chars(text: &str) -> Vec<char> { text.chars().collect() }

    #[test]
    fn test_common_prefix_len() {
        assert_eq!(common_prefix_len(&chars(""), &chars("")), 0);
        assert_eq!(common_prefix_len(&chars("foobarbaz"), &chars("foobarblah")), 7);
        assert_eq!(common_prefix_len(&chars("foobarbaz"), &chars("blablabla")), 0);
        assert_eq!(common_prefix_len(&chars("same"), &chars("same")), 4);
    }

    #[test]
    fn test_common_prefix_len_multi_byte() {
        assert_eq!(common_prefix_len(&chars("it’s"), &chars("it’d")), 3);
    }
}
