/// Length of the common suffix of `old` and `new`, in items, looking at most
/// `max_len` items back from either end. The cap keeps a suffix scan from
/// re-counting items an earlier prefix scan already matched.
pub fn common_suffix_len<T>(old: &[T], new: &[T], max_len: usize) -> usize
where
    T: PartialEq,
{
    old.iter()
        .rev()
        .zip(new.iter().rev())
        .take(max_len)
        .take_while(|(old_item, new_item)| old_item == new_item)
        .count()
}
