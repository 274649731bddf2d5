use multiversx_sc::api::ManagedTypeApi;
use multiversx_sc::types::BigInt;

/// Returns the sorted middle, or the lower of the two middle items if the
/// slice has an even number of elements, so the result is always one of the
/// submitted values.
///
/// Sorts the slice in place, making the result independent of the order the
/// values were collected in.
pub fn calculate<M: ManagedTypeApi>(list: &mut [BigInt<M>]) -> Option<BigInt<M>> {
    if list.is_empty() {
        return None;
    }
    list.sort_unstable();

    // [100, 130, 110, 120] -> [100, 110, 120, 130] -> index 1 -> 110
    let middle_index = (list.len() - 1) / 2;
    list.get(middle_index).cloned()
}
