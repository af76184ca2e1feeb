/// Implements the list conversions shared by all vector-backed geometries:
/// owned and borrowed vectors, slices and fixed-size array literals of anything the
/// element type converts from. Test fixtures lean on the array form heavily.
#[macro_export]
macro_rules! impl_geometry_from_list {
	($($outer:ty => $inner:ty),* $(,)?) => {$(
		impl<T> From<Vec<T>> for $outer
		where
			$inner: From<T>,
		{
			fn from(value: Vec<T>) -> Self {
				Self(value.into_iter().map(<$inner>::from).collect())
			}
		}

		impl<'a, T> From<&'a Vec<T>> for $outer
		where
			$inner: From<&'a T>,
		{
			fn from(value: &'a Vec<T>) -> Self {
				Self(value.iter().map(<$inner>::from).collect())
			}
		}

		impl<'a, T> From<&'a [T]> for $outer
		where
			$inner: From<&'a T>,
		{
			fn from(value: &'a [T]) -> Self {
				Self(value.iter().map(<$inner>::from).collect())
			}
		}

		impl<'a, T, const N: usize> From<&'a [T; N]> for $outer
		where
			$inner: From<&'a T>,
		{
			fn from(value: &'a [T; N]) -> Self {
				Self(value.iter().map(<$inner>::from).collect())
			}
		}
	)*};
}
