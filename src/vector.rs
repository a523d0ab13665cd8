use core::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub, SubAssign};
use core::{array, fmt, slice};
use std::str::FromStr;
use log::debug;
use crate::error::Error;




#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]


/**
 * A statically-sized numeric vector over a generic scalar data type T, which
 * supports arithmetic operations also supported by T. The components are
 * stored inline, and the dimension is part of the type, so operations that
 * require matching dimensions are checked by the compiler.
 */
pub struct Vector<T, const DIM: usize> {
    data: [T; DIM],
}




// ============================================================================
impl<T, const DIM: usize> Vector<T, DIM> {


    /**
     * Create a vector from an array of its components. A vector has at least
     * one component, so `DIM == 0` is rejected when the call is compiled.
     */
    pub const fn new(data: [T; DIM]) -> Self {
        const { assert!(DIM > 0, "vector dimension must be at least one") };
        Self { data }
    }


    /**
     * Create a vector by evaluating a function at each index, in ascending
     * order.
     */
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T
    {
        Self::new(array::from_fn(f))
    }


    /**
     * Return the number of components. This is always `DIM`.
     */
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        DIM
    }


    /**
     * Return a reference to the component at a compile-time index. An index
     * not less than `DIM` is rejected when the call is compiled.
     */
    #[inline]
    pub fn at<const I: usize>(&self) -> &T {
        const { assert!(I < DIM, "component index out of range") };
        &self.data[I]
    }

    #[inline]
    pub fn at_mut<const I: usize>(&mut self) -> &mut T {
        const { assert!(I < DIM, "component index out of range") };
        &mut self.data[I]
    }


    /**
     * Return a reference to the component at a runtime index, or `None` if
     * the index is out of range.
     */
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }


    /**
     * Like `get`, but reports an out-of-range index as an error.
     */
    pub fn try_get(&self, index: usize) -> Result<&T, Error> {
        self.data.get(index).ok_or(Error::IndexOutOfRange { index, dim: DIM })
    }

    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        self.data.get_mut(index).ok_or(Error::IndexOutOfRange { index, dim: DIM })
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn as_array(&self) -> &[T; DIM] {
        &self.data
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_array(self) -> [T; DIM] {
        self.data
    }


    /**
     * Apply a function to each component, returning a vector of the results.
     */
    pub fn map<U, F>(self, f: F) -> Vector<U, DIM>
    where
        F: FnMut(T) -> U
    {
        Vector { data: self.data.map(f) }
    }
}




// ============================================================================
macro_rules! named_components {
    ($dim:literal: $($get:ident $get_mut:ident $index:literal),+) => {
        impl<T> Vector<T, $dim> {
            $(
                #[doc = concat!("Return a reference to component ", stringify!($index), ".")]
                #[inline]
                pub fn $get(&self) -> &T {
                    &self.data[$index]
                }

                #[doc = concat!("Return a mutable reference to component ", stringify!($index), ".")]
                #[inline]
                pub fn $get_mut(&mut self) -> &mut T {
                    &mut self.data[$index]
                }
            )+
        }
    };
}

named_components!(1: x x_mut 0);
named_components!(2: x x_mut 0, y y_mut 1);
named_components!(3: x x_mut 0, y y_mut 1, z z_mut 2);
named_components!(4: x x_mut 0, y y_mut 1, z z_mut 2, w w_mut 3);




// ============================================================================
impl<T: Default, const DIM: usize> Default for Vector<T, DIM> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const DIM: usize> From<[T; DIM]> for Vector<T, DIM> {
    fn from(data: [T; DIM]) -> Self {
        Self::new(data)
    }
}

impl<T, const DIM: usize> From<Vector<T, DIM>> for [T; DIM] {
    fn from(v: Vector<T, DIM>) -> Self {
        v.data
    }
}

impl<T, const DIM: usize> AsRef<[T]> for Vector<T, DIM> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<'a, T: Clone, const DIM: usize> TryFrom<&'a [T]> for Vector<T, DIM> {
    type Error = Error;

    fn try_from(slice: &'a [T]) -> Result<Self, Self::Error> {
        if slice.len() != DIM {
            debug!("rejected slice of length {} for a vector of dimension {}", slice.len(), DIM);
            return Err(Error::LengthMismatch { expected: DIM, found: slice.len() })
        }
        Ok(Self::from_fn(|i| slice[i].clone()))
    }
}




// ============================================================================
impl<T, const DIM: usize> IntoIterator for Vector<T, DIM> {
    type Item = T;
    type IntoIter = array::IntoIter<T, DIM>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, const DIM: usize> IntoIterator for &'a Vector<T, DIM> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T, const DIM: usize> IntoIterator for &'a mut Vector<T, DIM> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}




// ============================================================================
impl<T, U, V, const DIM: usize> Add<Vector<U, DIM>> for Vector<T, DIM>
where
    T: Copy + Add<U, Output = V>,
    U: Copy
{
    type Output = Vector<V, DIM>;

    fn add(self, other: Vector<U, DIM>) -> Self::Output {
        Vector::from_fn(|i| self.data[i] + other.data[i])
    }
}

impl<T, U, V, const DIM: usize> Sub<Vector<U, DIM>> for Vector<T, DIM>
where
    T: Copy + Sub<U, Output = V>,
    U: Copy
{
    type Output = Vector<V, DIM>;

    fn sub(self, other: Vector<U, DIM>) -> Self::Output {
        Vector::from_fn(|i| self.data[i] - other.data[i])
    }
}

impl<T, U, V, const DIM: usize> Mul<U> for Vector<T, DIM>
where
    T: Mul<U, Output = V>,
    U: Copy
{
    type Output = Vector<V, DIM>;

    fn mul(self, scalar: U) -> Self::Output {
        self.map(|x| x * scalar)
    }
}

impl<T, U, V, const DIM: usize> Div<U> for Vector<T, DIM>
where
    T: Div<U, Output = V>,
    U: Copy
{
    type Output = Vector<V, DIM>;

    fn div(self, scalar: U) -> Self::Output {
        self.map(|x| x / scalar)
    }
}

impl<T, V, const DIM: usize> Neg for Vector<T, DIM>
where
    T: Neg<Output = V>
{
    type Output = Vector<V, DIM>;

    fn neg(self) -> Self::Output {
        self.map(|x| -x)
    }
}

impl<T, U, const DIM: usize> AddAssign<Vector<U, DIM>> for Vector<T, DIM>
where
    T: AddAssign<U>
{
    fn add_assign(&mut self, other: Vector<U, DIM>) {
        for (x, y) in self.data.iter_mut().zip(other.data) {
            *x += y
        }
    }
}

impl<T, U, const DIM: usize> SubAssign<Vector<U, DIM>> for Vector<T, DIM>
where
    T: SubAssign<U>
{
    fn sub_assign(&mut self, other: Vector<U, DIM>) {
        for (x, y) in self.data.iter_mut().zip(other.data) {
            *x -= y
        }
    }
}




// ============================================================================
impl<T, const DIM: usize> Index<usize> for Vector<T, DIM> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T, const DIM: usize> IndexMut<usize> for Vector<T, DIM> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}




// ============================================================================
impl<T: fmt::Display, const DIM: usize> fmt::Display for Vector<T, DIM> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "(")?;

        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(fmt, ", ")?;
            }
            x.fmt(fmt)?;
        }
        write!(fmt, ")")
    }
}


/**
 * Parse a comma-separated list of exactly `DIM` components, optionally
 * enclosed in parentheses, e.g. `"1, 0, 0"` or `"(1.5,2,3)"`.
 */
impl<T: FromStr, const DIM: usize> FromStr for Vector<T, DIM> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let inner = s
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .unwrap_or(s);

        let texts: Vec<&str> = inner.split(',').map(str::trim).collect();

        if texts.len() != DIM {
            debug!("rejected '{}': expected {} components, found {}", s, DIM, texts.len());
            return Err(Error::LengthMismatch { expected: DIM, found: texts.len() })
        }

        let mut data = Vec::with_capacity(DIM);

        for (index, text) in texts.into_iter().enumerate() {
            match text.parse() {
                Ok(x) => data.push(x),
                Err(_) => {
                    debug!("rejected '{}': component {} is '{}'", s, index, text);
                    return Err(Error::InvalidComponent { index, text: text.to_string() })
                }
            }
        }

        <[T; DIM]>::try_from(data)
            .map(Self::new)
            .map_err(|data| Error::LengthMismatch { expected: DIM, found: data.len() })
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use crate::error::Error;
    use crate::make_vector;
    use super::Vector;

    /**
     * Check that indexing, `get` and the named accessor agree on every
     * component of a vector built from the given values.
     */
    macro_rules! check_components {
        ($($value:expr => $get:ident),+) => {{
            let v = make_vector!($($value),+);
            let mut index = 0;
            $(
                assert_eq!(v[index], *v.$get(), "v[{}] = {}, v.{}() = {}", index, v[index], stringify!($get), v.$get());
                assert_eq!(v.get(index), Some(v.$get()));
                index += 1;
            )+
            assert_eq!(index, v.len());
        }};
    }

    #[test]
    fn component_getters_agree_with_indexing() {
        check_components!(0.0f32 => x);
        check_components!(0.0f32 => x, 1.0f32 => y);
        check_components!(0.0f32 => x, 1.0f32 => y, 2.0f32 => z);
        check_components!(0.0f32 => x, 1.0f32 => y, 2.0f32 => z, 3.0f32 => w);

        check_components!(0.0f64 => x);
        check_components!(0.0f64 => x, 1.0f64 => y);
        check_components!(0.0f64 => x, 1.0f64 => y, 2.0f64 => z);
        check_components!(0.0f64 => x, 1.0f64 => y, 2.0f64 => z, 3.0f64 => w);

        check_components!(0i32 => x);
        check_components!(0i32 => x, 1i32 => y);
        check_components!(0i32 => x, 1i32 => y, 2i32 => z);
        check_components!(0i32 => x, 1i32 => y, 2i32 => z, 3i32 => w);

        check_components!(0u64 => x);
        check_components!(0u64 => x, 1u64 => y);
        check_components!(0u64 => x, 1u64 => y, 2u64 => z);
        check_components!(0u64 => x, 1u64 => y, 2u64 => z, 3u64 => w);
    }

    #[test]
    fn compile_time_index_matches_named_accessor() {
        let v = Vector::new([5, 6, 7, 8]);
        assert_eq!(v.at::<0>(), v.x());
        assert_eq!(v.at::<1>(), v.y());
        assert_eq!(v.at::<2>(), v.z());
        assert_eq!(v.at::<3>(), v.w());
    }

    #[test]
    fn mutation_through_accessors_is_visible_through_indexing() {
        let mut v = Vector::<f64, 3>::default();
        *v.x_mut() = 1.0;
        *v.at_mut::<1>() = 2.0;
        v[2] = 3.0;
        assert_eq!(v, Vector::new([1.0, 2.0, 3.0]));
        assert_eq!(*v.z(), 3.0);
    }

    #[test]
    fn default_vector_has_default_components() {
        assert_eq!(Vector::<i32, 4>::default(), Vector::new([0, 0, 0, 0]));
        assert_eq!(Vector::<f32, 2>::default(), Vector::new([0.0, 0.0]));
    }

    #[test]
    fn equality_is_exact() {
        assert_eq!(Vector::new([0.1 + 0.2, 1.0]), Vector::new([0.1 + 0.2, 1.0]));
        assert_ne!(Vector::new([0.1 + 0.2, 1.0]), Vector::new([0.3, 1.0]));
        assert_ne!(Vector::new([1, 2, 3]), Vector::new([1, 2, 4]));
    }

    #[test]
    fn runtime_index_out_of_range_is_an_error() {
        let mut v = Vector::new([1, 2, 3]);
        assert_eq!(v.try_get(2), Ok(&3));
        assert_eq!(v.try_get(3), Err(Error::IndexOutOfRange { index: 3, dim: 3 }));
        assert_eq!(v.try_get_mut(7), Err(Error::IndexOutOfRange { index: 7, dim: 3 }));
        assert_eq!(v.get(3), None);
    }

    #[test]
    #[should_panic]
    fn indexing_out_of_range_panics() {
        let v = Vector::new([1.0, 2.0, 3.0]);
        let i = v.len();
        let _component = v[i];
    }

    #[test]
    fn vectors_can_be_made_from_slices_of_the_right_length() {
        let data = [1, 2, 3, 4, 5];
        assert_eq!(Vector::<i32, 3>::try_from(&data[..3]), Ok(Vector::new([1, 2, 3])));
        assert_eq!(
            Vector::<i32, 3>::try_from(&data[..]),
            Err(Error::LengthMismatch { expected: 3, found: 5 }));
    }

    #[test]
    fn arithmetic_works_component_wise() {
        let a = Vector::new([1.0, 2.0, 3.0]);
        let b = Vector::new([0.5, 0.5, 0.5]);
        assert_eq!(a + b, Vector::new([1.5, 2.5, 3.5]));
        assert_eq!(a - b, Vector::new([0.5, 1.5, 2.5]));
        assert_eq!(a * 2.0, Vector::new([2.0, 4.0, 6.0]));
        assert_eq!(a / 2.0, Vector::new([0.5, 1.0, 1.5]));
        assert_eq!(-a, Vector::new([-1.0, -2.0, -3.0]));

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
    }

    #[test]
    fn map_and_iteration_visit_components_in_order() {
        let v = Vector::new([1, 2, 3, 4]).map(|x| x * 10);
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![10, 20, 30, 40]);
        assert_eq!(v.into_iter().sum::<i32>(), 100);
        assert_eq!(Vector::<usize, 3>::from_fn(|i| i * i).into_array(), [0, 1, 4]);
    }

    #[test]
    fn display_and_parse_agree() {
        let v = Vector::new([1.5, -2.0, 3.0]);
        assert_eq!(v.to_string(), "(1.5, -2, 3)");
        assert_eq!(v.to_string().parse::<Vector<f64, 3>>(), Ok(v));
        assert_eq!("1, 0,0".parse::<Vector<i32, 3>>(), Ok(Vector::new([1, 0, 0])));
    }

    #[test]
    fn parsing_reports_bad_input() {
        assert_eq!(
            "1, 2".parse::<Vector<f32, 3>>(),
            Err(Error::LengthMismatch { expected: 3, found: 2 }));
        assert_eq!(
            "(1, x, 3)".parse::<Vector<f32, 3>>(),
            Err(Error::InvalidComponent { index: 1, text: "x".to_string() }));
        assert_eq!(
            "1, -2".parse::<Vector<u32, 2>>(),
            Err(Error::InvalidComponent { index: 1, text: "-2".to_string() }));
    }
}
