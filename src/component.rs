use core::{array, slice};
use crate::vector::Vector;




/**
 * Trait for a group of vectors of dimension `DIM` whose components can be
 * visited in lockstep. A vector taken by shared reference yields `&T`, by
 * mutable reference `&mut T`, and by value `T`. A tuple of up to four such
 * groups yields a tuple of their components; every member must have the same
 * dimension, since the tuple implements `Components<DIM>` only when each
 * member does.
 */
pub trait Components<const DIM: usize> {
    type Item;
    type Iter: Iterator<Item = Self::Item>;

    fn components(self) -> Self::Iter;
}


/**
 * Iterator over several component iterators at once. It is exhausted as soon
 * as any of them is.
 */
pub struct Lockstep<I>(I);




// ============================================================================
impl<'a, T, const DIM: usize> Components<DIM> for &'a Vector<T, DIM> {
    type Item = &'a T;
    type Iter = slice::Iter<'a, T>;

    fn components(self) -> Self::Iter {
        self.iter()
    }
}

impl<'a, T, const DIM: usize> Components<DIM> for &'a mut Vector<T, DIM> {
    type Item = &'a mut T;
    type Iter = slice::IterMut<'a, T>;

    fn components(self) -> Self::Iter {
        self.iter_mut()
    }
}

impl<T, const DIM: usize> Components<DIM> for Vector<T, DIM> {
    type Item = T;
    type Iter = array::IntoIter<T, DIM>;

    fn components(self) -> Self::Iter {
        self.into_iter()
    }
}

macro_rules! lockstep {
    ($($name:ident $index:tt),+) => {
        impl<$($name),+> Iterator for Lockstep<($($name,)+)>
        where
            $($name: Iterator),+
        {
            type Item = ($($name::Item,)+);

            fn next(&mut self) -> Option<Self::Item> {
                Some(($(self.0.$index.next()?,)+))
            }
        }

        impl<$($name),+, const DIM: usize> Components<DIM> for ($($name,)+)
        where
            $($name: Components<DIM>),+
        {
            type Item = ($($name::Item,)+);
            type Iter = Lockstep<($($name::Iter,)+)>;

            fn components(self) -> Self::Iter {
                Lockstep(($(self.$index.components(),)+))
            }
        }
    };
}

lockstep!(A 0);
lockstep!(A 0, B 1);
lockstep!(A 0, B 1, C 2);
lockstep!(A 0, B 1, C 2, D 3);




/**
 * Apply an operation to every index of one or more vectors of the same
 * dimension, in ascending index order. The operation receives the index and
 * the components at that index (a tuple of them when `vectors` is a tuple).
 *
 * The results, in index order, are returned as a new vector of any element
 * type. An operation run only for its side effects returns `()`, and the
 * result is then a `Vector<(), DIM>`, which occupies no memory and may be
 * ignored.
 *
 * ```
 * use geovec::{for_each, Vector};
 *
 * let mut v = Vector::<f32, 3>::default();
 * for_each(|_, c| *c = 10.0, &mut v);
 * assert_eq!(v, Vector::new([10.0, 10.0, 10.0]));
 *
 * let a = Vector::new([1.0f32, 2.0, 3.0, 4.0]);
 * let b = Vector::new([10.0f32, 20.0, 30.0, 40.0]);
 * let p = for_each(|_, (a, b)| a * b, (&a, &b));
 * assert_eq!(p, Vector::new([10.0, 40.0, 90.0, 160.0]));
 * ```
 */
pub fn for_each<V, F, R, const DIM: usize>(mut operation: F, vectors: V) -> Vector<R, DIM>
where
    V: Components<DIM>,
    F: FnMut(usize, V::Item) -> R
{
    let mut items = vectors.components();

    Vector::from_fn(|index| match items.next() {
        Some(item) => operation(index, item),
        None => unreachable!("component iterator ended before index {} of {}", index, DIM),
    })
}
