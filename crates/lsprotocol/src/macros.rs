//! Declarative builders for the repetitive parts of the schema.
//!
//! Unions, open enumerations and string-literal discriminants all follow the
//! same handful of shapes, so each shape is written once here and stamped out
//! across the type modules.

/// Declares a named sum type whose alternatives are decoded in order.
///
/// Encoding writes the held alternative with no wrapper. Decoding buffers the
/// raw JSON value, rejects `null`, then tries each alternative with the strict
/// decoder from [`crate::codec::strict`]. The first alternative that decodes
/// without unknown or missing fields wins.
macro_rules! lsp_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident($ty:ty)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant($ty),
            )+
        }

        impl $name {
            /// Alternative type names, in the order they are attempted.
            pub const ALTERNATIVES: &'static [&'static str] = &[$(stringify!($ty)),+];
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                match self {
                    $(Self::$variant(value) => ::serde::Serialize::serialize(value, serializer),)+
                }
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                $crate::codec::union::decode_alternatives(
                    stringify!($name),
                    Self::ALTERNATIVES,
                    &raw,
                    |candidate| {
                        $(
                            if let Ok(value) = $crate::codec::strict::from_value::<$ty>(candidate) {
                                return Some(Self::$variant(value));
                            }
                        )+
                        None
                    },
                )
                .map_err(<D::Error as ::serde::de::Error>::custom)
            }
        }
    };
}

/// Declares an open numeric enumeration.
///
/// The wire value is kept verbatim, so values outside the published set decode
/// and re-encode unchanged. Published values are associated constants.
macro_rules! lsp_enum {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($repr:ty) {
            $(
                $(#[$const_meta:meta])*
                const $konst:ident = $value:literal;
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(transparent)]
        $vis struct $name($repr);

        impl $name {
            $(
                $(#[$const_meta])*
                #[doc = ""]
                #[doc = concat!("Wire value `", stringify!($value), "`.")]
                pub const $konst: Self = Self($value);
            )+

            /// Every published value, in declaration order.
            pub const KNOWN: &'static [Self] = &[$(Self::$konst),+];

            const NAMES: &'static [(Self, &'static str)] = &[$((Self::$konst, stringify!($konst))),+];

            /// Wraps a raw wire value, published or not.
            #[must_use]
            pub const fn new(value: $repr) -> Self {
                Self(value)
            }

            /// Returns the raw wire value.
            #[must_use]
            pub const fn value(self) -> $repr {
                self.0
            }

            /// Returns the constant name when the value is a published one.
            #[must_use]
            pub fn name(self) -> Option<&'static str> {
                Self::NAMES
                    .iter()
                    .find(|(known, _)| *known == self)
                    .map(|(_, label)| *label)
            }

            /// Reports whether the value is one of the published constants.
            #[must_use]
            pub fn is_known(self) -> bool {
                Self::KNOWN.contains(&self)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self.name() {
                    Some(label) => write!(formatter, "{}::{}", stringify!($name), label),
                    None => write!(formatter, "{}({})", stringify!($name), self.0),
                }
            }
        }

        impl From<$repr> for $name {
            fn from(value: $repr) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $repr {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

/// Declares an open string enumeration.
///
/// Constants borrow `'static` text; decoded values own their text. Equality
/// compares the text, so a decoded `"quickfix"` equals the `QUICKFIX`
/// constant.
macro_rules! lsp_string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$const_meta:meta])*
                const $konst:ident = $value:literal;
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(transparent)]
        $vis struct $name(::std::borrow::Cow<'static, str>);

        impl $name {
            $(
                $(#[$const_meta])*
                #[doc = ""]
                #[doc = concat!("Wire value `", stringify!($value), "`.")]
                pub const $konst: Self = Self(::std::borrow::Cow::Borrowed($value));
            )+

            /// Every published value, in declaration order.
            pub const KNOWN: &'static [Self] = &[$(Self::$konst),+];

            /// Wraps an arbitrary wire value.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(::std::borrow::Cow::Owned(value.into()))
            }

            /// Wraps a static wire value without allocating.
            #[must_use]
            pub const fn from_static(value: &'static str) -> Self {
                Self(::std::borrow::Cow::Borrowed(value))
            }

            /// Returns the wire text.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Reports whether the value is one of the published constants.
            #[must_use]
            pub fn is_known(&self) -> bool {
                Self::KNOWN.contains(self)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                formatter.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::new(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }
    };
}

/// Declares a unit type that encodes as one fixed string.
///
/// Used for `kind` discriminants such as `"create"` or `"begin"`. Decoding any
/// other string fails, which lets union alternatives that differ only by their
/// literal tell themselves apart.
macro_rules! string_literal {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident = $literal:literal;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $name {
            /// The literal wire text.
            pub const VALUE: &'static str = $literal;
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str($literal)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let text = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                if text == $literal {
                    Ok(Self)
                } else {
                    Err(<D::Error as ::serde::de::Error>::invalid_value(
                        ::serde::de::Unexpected::Str(&text),
                        &$literal,
                    ))
                }
            }
        }
    };
}

/// Resolves the payload type of a catalogue entry; entries without a
/// `params` member carry [`crate::types::LspNull`].
macro_rules! catalogue_params {
    () => {
        $crate::types::LspNull
    };
    ($params:ty) => {
        $params
    };
}

/// Whether a catalogue entry declares a `params` member.
macro_rules! catalogue_has_params {
    () => {
        false
    };
    ($params:ty) => {
        true
    };
}

/// Declares the request catalogue.
///
/// Each entry yields an uninhabited marker type implementing
/// [`crate::message::LspRequest`], named after its
/// [`crate::methods::RequestMethod`] variant, plus request and response
/// envelope aliases. The macro also emits `check_params`, which decodes a
/// raw params value as the payload type of a given method.
macro_rules! lsp_requests {
    (
        $(
            $(#[$meta:meta])*
            $marker:ident => $request:ident, $response:ident {
                $(params: $params:ty,)?
                result: $result:ty $(,)?
            }
        )+
    ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub enum $marker {}

            impl $crate::message::LspRequest for $marker {
                const METHOD: $crate::methods::RequestMethod =
                    $crate::methods::RequestMethod::$marker;
                const HAS_PARAMS: bool = catalogue_has_params!($($params)?);
                type Params = catalogue_params!($($params)?);
                type Result = $result;
            }

            #[doc = concat!("Request envelope for [`", stringify!($marker), "`].")]
            pub type $request = $crate::message::RequestMessage<$marker>;

            #[doc = concat!("Response envelope for [`", stringify!($marker), "`].")]
            pub type $response = $crate::message::ResponseMessage<$marker>;
        )+

        /// Decodes `params` as the payload of `method` under `mode`.
        ///
        /// `Unknown` accepts any payload.
        pub(crate) fn check_params(
            method: $crate::methods::RequestMethod,
            params: &::serde_json::Value,
            mode: $crate::config::ParamsMode,
        ) -> ::std::result::Result<(), ::serde_json::Error> {
            match method {
                $(
                    $crate::methods::RequestMethod::$marker => {
                        mode.decode::<catalogue_params!($($params)?)>(params).map(|_| ())
                    }
                )+
                $crate::methods::RequestMethod::Unknown => Ok(()),
            }
        }
    };
}

/// Declares the notification catalogue.
///
/// Mirrors [`lsp_requests!`] for notifications: one marker implementing
/// [`crate::message::LspNotification`] and one envelope alias per entry, plus
/// a `check_params` function.
macro_rules! lsp_notifications {
    (
        $(
            $(#[$meta:meta])*
            $marker:ident => $notification:ident {
                $(params: $params:ty $(,)?)?
            }
        )+
    ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub enum $marker {}

            impl $crate::message::LspNotification for $marker {
                const METHOD: $crate::methods::NotificationMethod =
                    $crate::methods::NotificationMethod::$marker;
                const HAS_PARAMS: bool = catalogue_has_params!($($params)?);
                type Params = catalogue_params!($($params)?);
            }

            #[doc = concat!("Notification envelope for [`", stringify!($marker), "`].")]
            pub type $notification = $crate::message::NotificationMessage<$marker>;
        )+

        /// Decodes `params` as the payload of `method` under `mode`.
        ///
        /// `Unknown` accepts any payload.
        pub(crate) fn check_params(
            method: $crate::methods::NotificationMethod,
            params: &::serde_json::Value,
            mode: $crate::config::ParamsMode,
        ) -> ::std::result::Result<(), ::serde_json::Error> {
            match method {
                $(
                    $crate::methods::NotificationMethod::$marker => {
                        mode.decode::<catalogue_params!($($params)?)>(params).map(|_| ())
                    }
                )+
                $crate::methods::NotificationMethod::Unknown => Ok(()),
            }
        }
    };
}
