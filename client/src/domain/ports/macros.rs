//! Helper macro generating the driven-port error enums.
//!
//! Each variant gets a snake_case constructor whose fields accept
//! `impl Into<T>`, so call sites can pass `&str` where the field is a
//! `String`.

macro_rules! define_port_error {
    (@constructors $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@fold $variant () () $( $field : $ty, )*);
    };

    (@fold $variant:ident ($($params:tt)*) ($($inits:tt)*)) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@fold $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @fold
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            $(
                define_port_error!(@constructors $variant { $($field : $ty),* });
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for the constructor generation.

    define_port_error! {
        pub enum SamplePortError {
            Transport { message: String } => "transport: {message}",
            Upstream { status: u16, message: String } => "status {status}: {message}",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = SamplePortError::transport("socket closed");
        assert_eq!(err.to_string(), "transport: socket closed");
    }

    #[test]
    fn constructors_support_mixed_field_types() {
        let err = SamplePortError::upstream(503_u16, "unavailable");
        assert_eq!(err.to_string(), "status 503: unavailable");
        assert!(matches!(
            err,
            SamplePortError::Upstream { status: 503, .. }
        ));
    }
}
