use crate::vector::Vector;




/**
 * Trait for types that share a common type with `Rhs`, into which a value of
 * either type can be converted. Every type is its own common type. Among the
 * primitive numbers, mixing an integer with a float yields the float, and two
 * floats yield the wider one. Two different integers narrower than 32 bits
 * yield `i32`, whatever their signedness. Otherwise two integers of like
 * signedness yield the wider one, and a signed integer mixed with an unsigned
 * one yields the signed type when it is strictly wider, otherwise the unsigned
 * type of the larger width.
 *
 * `isize` and `usize` combine with the 128-bit types, the floats, each other,
 * and the integers narrower than 32 bits. `usize` also combines with `u32`,
 * `i32`, and `isize` with `i32`. There is no common type of `isize` with
 * `u32`, `i64` or `u64`, nor of `usize` with `i64` or `u64`, since the answer
 * would depend on the target's pointer width.
 */
pub trait Promote<Rhs = Self> {
    type Output;

    fn promote_lhs(self) -> Self::Output;

    fn promote_rhs(rhs: Rhs) -> Self::Output;
}


/**
 * The common type of `A` and `B`.
 */
pub type Common<A, B> = <A as Promote<B>>::Output;




// ============================================================================
impl<T> Promote<T> for T {
    type Output = T;

    #[inline]
    fn promote_lhs(self) -> T {
        self
    }

    #[inline]
    fn promote_rhs(rhs: T) -> T {
        rhs
    }
}

macro_rules! promote {
    ($($a:ty, $b:ty => $out:ty;)+) => {
        $(
            impl Promote<$b> for $a {
                type Output = $out;

                #[inline]
                fn promote_lhs(self) -> $out {
                    self as $out
                }

                #[inline]
                fn promote_rhs(rhs: $b) -> $out {
                    rhs as $out
                }
            }

            impl Promote<$a> for $b {
                type Output = $out;

                #[inline]
                fn promote_lhs(self) -> $out {
                    self as $out
                }

                #[inline]
                fn promote_rhs(rhs: $a) -> $out {
                    rhs as $out
                }
            }
        )+
    };
}

promote! {
    f32, f64 => f64;

    i8,    f32 => f32;  i8,    f64 => f64;
    i16,   f32 => f32;  i16,   f64 => f64;
    i32,   f32 => f32;  i32,   f64 => f64;
    i64,   f32 => f32;  i64,   f64 => f64;
    i128,  f32 => f32;  i128,  f64 => f64;
    isize, f32 => f32;  isize, f64 => f64;
    u8,    f32 => f32;  u8,    f64 => f64;
    u16,   f32 => f32;  u16,   f64 => f64;
    u32,   f32 => f32;  u32,   f64 => f64;
    u64,   f32 => f32;  u64,   f64 => f64;
    u128,  f32 => f32;  u128,  f64 => f64;
    usize, f32 => f32;  usize, f64 => f64;

    i8,  i16 => i32;  i8,  u8  => i32;  i8,  u16 => i32;
    i16, u8  => i32;  i16, u16 => i32;  u8,  u16 => i32;

    i8,  i32 => i32;  i8,  i64 => i64;  i16, i32 => i32;  i16, i64 => i64;  i32, i64 => i64;
    u8,  u32 => u32;  u8,  u64 => u64;  u16, u32 => u32;  u16, u64 => u64;  u32, u64 => u64;

    i8,  u32 => u32;  i8,  u64 => u64;
    i16, u32 => u32;  i16, u64 => u64;
    i32, u8  => i32;  i32, u16 => i32;  i32, u32 => u32;  i32, u64 => u64;
    i64, u8  => i64;  i64, u16 => i64;  i64, u32 => i64;  i64, u64 => u64;

    i128, i8 => i128;  i128, i16 => i128;  i128, i32 => i128;  i128, i64 => i128;  i128, isize => i128;
    i128, u8 => i128;  i128, u16 => i128;  i128, u32 => i128;  i128, u64 => i128;  i128, usize => i128;

    u128, u8 => u128;  u128, u16 => u128;  u128, u32 => u128;  u128, u64 => u128;  u128, usize => u128;
    u128, i8 => u128;  u128, i16 => u128;  u128, i32 => u128;  u128, i64 => u128;  u128, isize => u128;
    u128, i128 => u128;

    isize, i8 => isize;  isize, i16 => isize;  isize, i32 => isize;  isize, u8 => isize;  isize, u16 => isize;
    usize, u8 => usize;  usize, u16 => usize;  usize, u32 => usize;
    usize, i8 => usize;  usize, i16 => usize;  usize, i32 => usize;  usize, isize => usize;
}




/**
 * Trait for tuples of one to four values sharing a common type, which can be
 * collected into a vector of that type.
 */
pub trait MakeVector {
    type Output;

    fn make_vector(self) -> Self::Output;
}




// ============================================================================
impl<A> MakeVector for (A,) {
    type Output = Vector<A, 1>;

    fn make_vector(self) -> Self::Output {
        Vector::new([self.0])
    }
}

impl<A, B> MakeVector for (A, B)
where
    A: Promote<B>
{
    type Output = Vector<Common<A, B>, 2>;

    fn make_vector(self) -> Self::Output {
        let (a, b) = self;
        Vector::new([
            <A as Promote<B>>::promote_lhs(a),
            <A as Promote<B>>::promote_rhs(b),
        ])
    }
}

impl<A, B, C> MakeVector for (A, B, C)
where
    A: Promote<B>,
    Common<A, B>: Promote<C>
{
    type Output = Vector<Common<Common<A, B>, C>, 3>;

    fn make_vector(self) -> Self::Output {
        let (a, b, c) = self;
        let ab = <Common<A, B> as Promote<C>>::promote_lhs;
        Vector::new([
            ab(<A as Promote<B>>::promote_lhs(a)),
            ab(<A as Promote<B>>::promote_rhs(b)),
            <Common<A, B> as Promote<C>>::promote_rhs(c),
        ])
    }
}

impl<A, B, C, D> MakeVector for (A, B, C, D)
where
    A: Promote<B>,
    Common<A, B>: Promote<C>,
    Common<Common<A, B>, C>: Promote<D>
{
    type Output = Vector<Common<Common<Common<A, B>, C>, D>, 4>;

    fn make_vector(self) -> Self::Output {
        let (a, b, c, d) = self;
        let ab = <Common<A, B> as Promote<C>>::promote_lhs;
        let abc = <Common<Common<A, B>, C> as Promote<D>>::promote_lhs;
        Vector::new([
            abc(ab(<A as Promote<B>>::promote_lhs(a))),
            abc(ab(<A as Promote<B>>::promote_rhs(b))),
            abc(<Common<A, B> as Promote<C>>::promote_rhs(c)),
            <Common<Common<A, B>, C> as Promote<D>>::promote_rhs(d),
        ])
    }
}


/**
 * Build a vector from a tuple of one to four values, converting each to the
 * values' common type.
 */
pub fn make_vector<C: MakeVector>(components: C) -> C::Output {
    components.make_vector()
}


/**
 * Build a vector from one to four values, converting each to the values'
 * common type. `make_vector!(1, 2.5)` is a `Vector<f64, 2>`.
 */
#[macro_export]
macro_rules! make_vector {
    ($($component:expr),+ $(,)?) => {
        $crate::promote::make_vector(($($component,)+))
    };
}
