use core::ops::{Add, Mul, Sub};
use crate::vector::Vector;




/**
 * Return the dot product of two vectors of the same dimension: the sum, in
 * index order, of the component-wise products. The sum starts from the
 * product type's default value, which is zero for the numeric types.
 */
pub fn dot<T, U, V, const DIM: usize>(a: &Vector<T, DIM>, b: &Vector<U, DIM>) -> V
where
    T: Copy + Mul<U, Output = V>,
    U: Copy,
    V: Default + Add<Output = V>
{
    a.iter()
        .zip(b.iter())
        .fold(V::default(), |dot, (&lhs, &rhs)| dot + lhs * rhs)
}


/**
 * Return the cross product of two 3-vectors.
 */
pub fn cross<T, U, P, V>(a: &Vector<T, 3>, b: &Vector<U, 3>) -> Vector<V, 3>
where
    T: Copy + Mul<U, Output = P>,
    U: Copy,
    P: Sub<Output = V>
{
    let (ax, ay, az) = (*a.x(), *a.y(), *a.z());
    let (bx, by, bz) = (*b.x(), *b.y(), *b.z());

    Vector::new([
        ay * bz - az * by,
        az * bx - ax * bz,
        ax * by - ay * bx,
    ])
}




// ============================================================================
impl<T, const DIM: usize> Vector<T, DIM> {

    pub fn dot<U, V>(&self, other: &Vector<U, DIM>) -> V
    where
        T: Copy + Mul<U, Output = V>,
        U: Copy,
        V: Default + Add<Output = V>
    {
        dot(self, other)
    }
}

impl<T> Vector<T, 3> {

    pub fn cross<U, P, V>(&self, other: &Vector<U, 3>) -> Vector<V, 3>
    where
        T: Copy + Mul<U, Output = P>,
        U: Copy,
        P: Sub<Output = V>
    {
        cross(self, other)
    }
}
