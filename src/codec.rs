use core::fmt;
use core::marker::PhantomData;
use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeTuple, Serializer};
use crate::vector::Vector;




/**
 * A vector is serialized as a tuple of its `DIM` components.
 */
impl<T: Serialize, const DIM: usize> Serialize for Vector<T, DIM> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(DIM)?;

        for x in self.iter() {
            tuple.serialize_element(x)?;
        }
        tuple.end()
    }
}


/**
 * Deserializing a sequence that does not contain exactly `DIM` elements is an
 * `invalid_length` error.
 */
impl<'de, T: Deserialize<'de>, const DIM: usize> Deserialize<'de> for Vector<T, DIM> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(DIM, ComponentVisitor(PhantomData))
    }
}




// ============================================================================
struct ComponentVisitor<T, const DIM: usize>(PhantomData<T>);

impl<'de, T: Deserialize<'de>, const DIM: usize> Visitor<'de> for ComponentVisitor<T, DIM> {
    type Value = Vector<T, DIM>;

    fn expecting(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "a sequence of {} vector components", DIM)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut data = Vec::with_capacity(DIM);

        while let Some(x) = seq.next_element()? {
            data.push(x);

            if data.len() > DIM {
                return Err(de::Error::invalid_length(data.len(), &self))
            }
        }

        <[T; DIM]>::try_from(data)
            .map(Vector::new)
            .map_err(|data| de::Error::invalid_length(data.len(), &self))
    }
}
