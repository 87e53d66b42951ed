use ::serde::de::*;

/// Deserializes `null` as the type's default, Pexels sends `"alt": null` and friends
pub fn null_default<'de, D, T>(deser: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deser).map(Option::unwrap_or_default)
}
