//! `serde` serializers that render subjects directly as case labels.
//!
//! Rendering straight from the `Serialize` impl keeps floats intact:
//! `NaN` and the infinities have no JSON form, so going through
//! `serde_json::Value` would collapse them into `null`.

use serde::Serialize;
use serde::ser::{
    self, Impossible, SerializeMap, SerializeSeq, SerializeStruct, SerializeStructVariant,
    SerializeTuple, SerializeTupleStruct, SerializeTupleVariant, Serializer,
};

use crate::key::OBJECT_LABEL;

/// Label of `null` and of absent optional values.
pub(crate) const NULL_LABEL: &str = "null";

/// Smallest magnitude rendered without an exponent.
const DECIMAL_MIN: f64 = 1e-6;

/// Magnitude from which exponent notation is used.
const DECIMAL_MAX: f64 = 1e21;

type Error = serde_json::Error;

/// Renders a value as a label; `None` stands for `null`.
pub(crate) struct LabelSerializer;

/// Renders the label of one named field; `None` means the field is absent.
pub(crate) struct FieldSerializer<'f> {
    field: &'f str,
}

impl<'f> FieldSerializer<'f> {
    pub(crate) const fn new(field: &'f str) -> Self {
        Self { field }
    }
}

/// Formats a float the way numbers are conventionally shown as text.
fn float_label(value: f64) -> String {
    if value.is_nan() {
        return String::from("NaN");
    }
    if value.is_infinite() {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        return format!("{sign}Infinity");
    }
    if value == 0.0 {
        return String::from("0");
    }
    let magnitude = value.abs();
    if (DECIMAL_MIN..DECIMAL_MAX).contains(&magnitude) {
        return value.to_string();
    }
    let exponent_form = format!("{value:e}");
    match exponent_form.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponent_form,
    }
}

fn text<T: ToString + ?Sized>(value: &T) -> Result<Option<String>, Error> {
    Ok(Some(value.to_string()))
}

fn element<T: Serialize + ?Sized>(value: &T) -> Result<String, Error> {
    Ok(value.serialize(LabelSerializer)?.unwrap_or_default())
}

fn not_an_object() -> Error {
    ser::Error::custom("subject has no named fields")
}

impl Serializer for LabelSerializer {
    type Ok = Option<String>;
    type Error = Error;
    type SerializeSeq = JoinedLabel;
    type SerializeTuple = JoinedLabel;
    type SerializeTupleStruct = JoinedLabel;
    type SerializeTupleVariant = ObjectLabel;
    type SerializeMap = ObjectLabel;
    type SerializeStruct = ObjectLabel;
    type SerializeStructVariant = ObjectLabel;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok, Error> {
        text(&v)
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok, Error> {
        text(&v)
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok, Error> {
        text(&v)
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok, Error> {
        text(&v)
    }

    fn serialize_i64(self, v: i64) -> Result<Self::Ok, Error> {
        text(&v)
    }

    fn serialize_i128(self, v: i128) -> Result<Self::Ok, Error> {
        text(&v)
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok, Error> {
        text(&v)
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok, Error> {
        text(&v)
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok, Error> {
        text(&v)
    }

    fn serialize_u64(self, v: u64) -> Result<Self::Ok, Error> {
        text(&v)
    }

    fn serialize_u128(self, v: u128) -> Result<Self::Ok, Error> {
        text(&v)
    }

    // Widen through the shortest decimal so `0.1_f32` stays `0.1`.
    fn serialize_f32(self, v: f32) -> Result<Self::Ok, Error> {
        let widened = v.to_string().parse().unwrap_or_else(|_| f64::from(v));
        self.serialize_f64(widened)
    }

    fn serialize_f64(self, v: f64) -> Result<Self::Ok, Error> {
        Ok(Some(float_label(v)))
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok, Error> {
        text(&v)
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok, Error> {
        text(v)
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Self::Ok, Error> {
        let joined = v.iter().map(u8::to_string).collect::<Vec<_>>().join(",");
        Ok(Some(joined))
    }

    fn serialize_none(self) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Self::Ok, Error> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok, Error> {
        text(variant)
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Self::Ok, Error> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        value: &T,
    ) -> Result<Self::Ok, Error> {
        value.serialize(Self)?;
        text(OBJECT_LABEL)
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<JoinedLabel, Error> {
        Ok(JoinedLabel::with_capacity(len.unwrap_or_default()))
    }

    fn serialize_tuple(self, len: usize) -> Result<JoinedLabel, Error> {
        Ok(JoinedLabel::with_capacity(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<JoinedLabel, Error> {
        Ok(JoinedLabel::with_capacity(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<ObjectLabel, Error> {
        Ok(ObjectLabel)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<ObjectLabel, Error> {
        Ok(ObjectLabel)
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<ObjectLabel, Error> {
        Ok(ObjectLabel)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<ObjectLabel, Error> {
        Ok(ObjectLabel)
    }
}

/// Sequence labels: element labels joined by commas, `null` rendered empty.
pub(crate) struct JoinedLabel {
    items: Vec<String>,
}

impl JoinedLabel {
    fn with_capacity(len: usize) -> Self {
        Self {
            items: Vec::with_capacity(len),
        }
    }

    fn push<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Error> {
        self.items.push(element(value)?);
        Ok(())
    }

    fn finish(self) -> Option<String> {
        Some(self.items.join(","))
    }
}

impl SerializeSeq for JoinedLabel {
    type Ok = Option<String>;
    type Error = Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Error> {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok, Error> {
        Ok(self.finish())
    }
}

impl SerializeTuple for JoinedLabel {
    type Ok = Option<String>;
    type Error = Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Error> {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok, Error> {
        Ok(self.finish())
    }
}

impl SerializeTupleStruct for JoinedLabel {
    type Ok = Option<String>;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Error> {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok, Error> {
        Ok(self.finish())
    }
}

/// Composite labels: contents are validated, then collapse to one label.
pub(crate) struct ObjectLabel;

impl ObjectLabel {
    fn check<T: Serialize + ?Sized>(value: &T) -> Result<(), Error> {
        value.serialize(LabelSerializer).map(|_| ())
    }
}

impl SerializeTupleVariant for ObjectLabel {
    type Ok = Option<String>;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Error> {
        Self::check(value)
    }

    fn end(self) -> Result<Self::Ok, Error> {
        text(OBJECT_LABEL)
    }
}

// Keys must render as text, matching what a JSON object can hold.
impl SerializeMap for ObjectLabel {
    type Ok = Option<String>;
    type Error = Error;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), Error> {
        key.serialize(MapKeySerializer).map(|_| ())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Error> {
        Self::check(value)
    }

    fn end(self) -> Result<Self::Ok, Error> {
        text(OBJECT_LABEL)
    }
}

impl SerializeStruct for ObjectLabel {
    type Ok = Option<String>;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        _key: &'static str,
        value: &T,
    ) -> Result<(), Error> {
        Self::check(value)
    }

    fn end(self) -> Result<Self::Ok, Error> {
        text(OBJECT_LABEL)
    }
}

impl SerializeStructVariant for ObjectLabel {
    type Ok = Option<String>;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        _key: &'static str,
        value: &T,
    ) -> Result<(), Error> {
        Self::check(value)
    }

    fn end(self) -> Result<Self::Ok, Error> {
        text(OBJECT_LABEL)
    }
}

/// Renders a map key, rejecting keys that are not scalars.
struct MapKeySerializer;

impl MapKeySerializer {
    fn scalar<T: Serialize + ?Sized>(value: &T) -> Result<String, Error> {
        value
            .serialize(LabelSerializer)?
            .ok_or_else(|| ser::Error::custom("map key must not be null"))
    }
}

fn key_must_be_scalar() -> Error {
    ser::Error::custom("map key must be a scalar")
}

impl Serializer for MapKeySerializer {
    type Ok = String;
    type Error = Error;
    type SerializeSeq = Impossible<String, Error>;
    type SerializeTuple = Impossible<String, Error>;
    type SerializeTupleStruct = Impossible<String, Error>;
    type SerializeTupleVariant = Impossible<String, Error>;
    type SerializeMap = Impossible<String, Error>;
    type SerializeStruct = Impossible<String, Error>;
    type SerializeStructVariant = Impossible<String, Error>;

    fn serialize_bool(self, v: bool) -> Result<String, Error> {
        Self::scalar(&v)
    }

    fn serialize_i8(self, v: i8) -> Result<String, Error> {
        Self::scalar(&v)
    }

    fn serialize_i16(self, v: i16) -> Result<String, Error> {
        Self::scalar(&v)
    }

    fn serialize_i32(self, v: i32) -> Result<String, Error> {
        Self::scalar(&v)
    }

    fn serialize_i64(self, v: i64) -> Result<String, Error> {
        Self::scalar(&v)
    }

    fn serialize_i128(self, v: i128) -> Result<String, Error> {
        Self::scalar(&v)
    }

    fn serialize_u8(self, v: u8) -> Result<String, Error> {
        Self::scalar(&v)
    }

    fn serialize_u16(self, v: u16) -> Result<String, Error> {
        Self::scalar(&v)
    }

    fn serialize_u32(self, v: u32) -> Result<String, Error> {
        Self::scalar(&v)
    }

    fn serialize_u64(self, v: u64) -> Result<String, Error> {
        Self::scalar(&v)
    }

    fn serialize_u128(self, v: u128) -> Result<String, Error> {
        Self::scalar(&v)
    }

    fn serialize_f32(self, v: f32) -> Result<String, Error> {
        Self::scalar(&v)
    }

    fn serialize_f64(self, v: f64) -> Result<String, Error> {
        Self::scalar(&v)
    }

    fn serialize_char(self, v: char) -> Result<String, Error> {
        Self::scalar(&v)
    }

    fn serialize_str(self, v: &str) -> Result<String, Error> {
        Ok(v.to_owned())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String, Error> {
        Err(key_must_be_scalar())
    }

    fn serialize_none(self) -> Result<String, Error> {
        Err(key_must_be_scalar())
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<String, Error> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<String, Error> {
        Err(key_must_be_scalar())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String, Error> {
        Err(key_must_be_scalar())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String, Error> {
        Ok(variant.to_owned())
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<String, Error> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String, Error> {
        Err(key_must_be_scalar())
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, Error> {
        Err(key_must_be_scalar())
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, Error> {
        Err(key_must_be_scalar())
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, Error> {
        Err(key_must_be_scalar())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, Error> {
        Err(key_must_be_scalar())
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, Error> {
        Err(key_must_be_scalar())
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, Error> {
        Err(key_must_be_scalar())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, Error> {
        Err(key_must_be_scalar())
    }
}

impl<'f> Serializer for FieldSerializer<'f> {
    type Ok = Option<String>;
    type Error = Error;
    type SerializeSeq = Impossible<Self::Ok, Error>;
    type SerializeTuple = Impossible<Self::Ok, Error>;
    type SerializeTupleStruct = Impossible<Self::Ok, Error>;
    type SerializeTupleVariant = Impossible<Self::Ok, Error>;
    type SerializeMap = FieldLookup<'f>;
    type SerializeStruct = FieldLookup<'f>;
    type SerializeStructVariant = Impossible<Self::Ok, Error>;

    fn serialize_bool(self, _v: bool) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_i8(self, _v: i8) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_i16(self, _v: i16) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_i32(self, _v: i32) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_i64(self, _v: i64) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_i128(self, _v: i128) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_u8(self, _v: u8) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_u16(self, _v: u16) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_u32(self, _v: u32) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_u64(self, _v: u64) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_u128(self, _v: u128) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_f32(self, _v: f32) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_f64(self, _v: f64) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_char(self, _v: char) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_str(self, _v: &str) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_none(self) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Self::Ok, Error> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Self::Ok, Error> {
        value.serialize(self)
    }

    // Externally tagged: `{ "Variant": value }`.
    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Self::Ok, Error> {
        if variant == self.field {
            let label = value.serialize(LabelSerializer)?;
            Ok(Some(label.unwrap_or_else(|| String::from(NULL_LABEL))))
        } else {
            Ok(None)
        }
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, Error> {
        Err(not_an_object())
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, Error> {
        Err(not_an_object())
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, Error> {
        Err(not_an_object())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, Error> {
        Err(not_an_object())
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<FieldLookup<'f>, Error> {
        Ok(FieldLookup::new(self.field))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<FieldLookup<'f>, Error> {
        Ok(FieldLookup::new(self.field))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, Error> {
        Err(not_an_object())
    }
}

/// Scans an object's entries for one field; the last occurrence wins.
pub(crate) struct FieldLookup<'f> {
    field: &'f str,
    pending: bool,
    found: Option<String>,
}

impl<'f> FieldLookup<'f> {
    const fn new(field: &'f str) -> Self {
        Self {
            field,
            pending: false,
            found: None,
        }
    }

    fn record<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Error> {
        let label = value.serialize(LabelSerializer)?;
        self.found = Some(label.unwrap_or_else(|| String::from(NULL_LABEL)));
        Ok(())
    }
}

impl SerializeMap for FieldLookup<'_> {
    type Ok = Option<String>;
    type Error = Error;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), Error> {
        self.pending = key.serialize(MapKeySerializer)? == self.field;
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Error> {
        if self.pending {
            self.record(value)
        } else {
            ObjectLabel::check(value)
        }
    }

    fn end(self) -> Result<Self::Ok, Error> {
        Ok(self.found)
    }
}

impl SerializeStruct for FieldLookup<'_> {
    type Ok = Option<String>;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), Error> {
        if key == self.field {
            self.record(value)
        } else {
            ObjectLabel::check(value)
        }
    }

    fn end(self) -> Result<Self::Ok, Error> {
        Ok(self.found)
    }
}
