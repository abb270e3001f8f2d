//! `serde` support: vectors are (de)serialized as fixed-length sequences.

use std::{fmt, marker::PhantomData};

use serde::{
    de::{self, SeqAccess, Visitor},
    ser::SerializeTuple,
    Deserialize, Deserializer, Serialize, Serializer,
};

use super::Vector;

impl<T: Serialize, const N: usize> Serialize for Vector<T, N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tup = serializer.serialize_tuple(N)?;
        for elem in &self.0 {
            tup.serialize_element(elem)?;
        }
        tup.end()
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for Vector<T, N>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct VectorVisitor<T, const N: usize>(PhantomData<T>);

        impl<'de, T, const N: usize> Visitor<'de> for VectorVisitor<T, N>
        where
            T: Deserialize<'de>,
        {
            type Value = Vector<T, N>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a sequence of {} elements", N)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut elems = Vec::with_capacity(N);
                while let Some(elem) = seq.next_element()? {
                    if elems.len() == N {
                        return Err(de::Error::invalid_length(N + 1, &self));
                    }
                    elems.push(elem);
                }
                let len = elems.len();
                <[T; N]>::try_from(elems)
                    .map(Vector)
                    .map_err(|_| de::Error::invalid_length(len, &self))
            }
        }

        deserializer.deserialize_tuple(N, VectorVisitor::<T, N>(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn json() {
        let v = vec3(1.5f32, -2.0, 0.0);
        let text = serde_json::to_string(&v).unwrap();
        assert_eq!(text, "[1.5,-2.0,0.0]");
        assert_eq!(serde_json::from_str::<Vec3f>(&text).unwrap(), v);
    }

    #[test]
    fn wrong_length() {
        assert!(serde_json::from_str::<Vec3i>("[1, 2]").is_err());
        assert!(serde_json::from_str::<Vec3i>("[1, 2, 3, 4]").is_err());
        assert!(serde_json::from_str::<Vec2i>("[1, \"a\"]").is_err());
    }
}
