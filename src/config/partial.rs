//! Merging and validation of partially specified config sections.
//!
//! Every config section has a generated partial twin in which all fields are
//! optional. The user's file is parsed into the partial form, layered over the
//! embedded defaults with [`PartialConfig::merge`], and then turned into the
//! real section by [`PartialConfig::validate`].

/// A partial config struct, which contains optional values of everything.
/// This is usually generated with the `PartialConfig` macro.
pub trait PartialConfig {
    /// The full config type, returned after validation.
    type Output;

    /// Merges the values from `high` and `low`, where `high` takes precedence
    /// in the case of conflicts.
    fn merge(low: Self, high: Self) -> Self;

    /// Validates the final struct. All required values should exist.
    fn validate(self) -> Result<Self::Output, ValidationError>;
}

/// Required fields were missing after merging.
#[derive(thiserror::Error, Default, Debug, PartialEq)]
#[error("Missing fields {fields:?} in [{}]", display_path(.path))]
pub struct ValidationError {
    pub fields: Vec<&'static str>,
    /// The section containing the missing fields, outermost first.
    pub path: Vec<&'static str>,
}

fn display_path(path: &[&'static str]) -> String {
    if path.is_empty() {
        "<root>".to_owned()
    } else {
        path.join(".")
    }
}

/// Derives the partial twin of a config section.
///
/// ```ignore
/// #[derive(PartialConfig!)]
/// #[derive_args(PanesPartial)]
/// #[derive(Serialize, Deserialize, Debug, PartialEq)]
/// pub struct Panes {
///     pub min_first: f64,
///     pub min_second: f64,
/// }
/// ```
///
/// Plain fields become `Option`s. Fields annotated with
/// `#[derive_args(FooPartial)]` are nested sections and use the given partial
/// type instead.
macro_rules! PartialConfig {
    (
        #[derive_args($SourceStructName:ident)]
        $(#[$struct_meta:meta])*
        $struct_vis:vis
        struct $StructName:ident {
            $(
                $(#[$($field_meta:tt)*])*
                $field_vis:vis
                $field_name:ident: $field_ty:ty
            ),* $(,)?
        }
    ) => {
        PartialConfig!(
            @source(
                // Identifiers used in the pushdown outputs, passed down for
                // hygiene.
                low, high, self, err
            ) [
                // Input struct and the fields left to process.
                $(#[$struct_meta])*
                struct $StructName => $SourceStructName {
                    $( $(#[$($field_meta)*])* $field_name: $field_ty, )*
                }
            ] -> [
                // Pushdown outputs: partial fields, merge, take, build.
                []; []; []; []
            ]
        );
    };

    // All fields have been processed. Emit the partial struct and its impl.
    (@source($low:ident, $high:ident, $self:ident, $err:ident) [
        $(#[$struct_meta:meta])*
        struct $StructName:ident => $SourceStructName:ident { }
    ] -> [
        [ $($fields:tt)* ]; [ $($merge:tt)* ]; [ $($take:tt)* ]; [ $($build:tt)* ]
    ]) => {
        $(#[$struct_meta])*
        // Every field is an Option or another partial struct, so Default is
        // the empty config.
        #[derive(Default)]
        #[serde(default)]
        struct $SourceStructName {
            $( $fields )*
        }

        impl $crate::config::partial::PartialConfig for $SourceStructName {
            type Output = $StructName;

            fn merge($low: Self, $high: Self) -> Self {
                Self {
                    $( $merge )*
                }
            }

            fn validate(
                $self,
            ) -> Result<$StructName, $crate::config::partial::ValidationError> {
                #[allow(unused_mut)]
                let mut $err = $crate::config::partial::ValidationError::default();
                $($take)*
                if !$err.fields.is_empty() {
                    return Err($err);
                }
                Ok($StructName {
                    $($build)*
                })
            }
        }
    };

    // `#[derive_args(FooPartial)]` field: a nested section, validated on its
    // own. Its errors surface after the missing fields of this section.
    (@source($low:ident, $high:ident, $self:ident, $err:ident) [
        $(#[$struct_meta:meta])*
        struct $StructName:ident => $SourceStructName:ident {
            #[derive_args($source_field_ty:ident)]
            $(#[$($field_meta:tt)*])*
            $field_name:ident: $field_ty:ty,
            $($rest:tt)*
        }
    ] -> [
        [ $($fields:tt)* ]; [ $($merge:tt)* ]; [ $($take:tt)* ]; [ $($build:tt)* ]
    ]) => {
        PartialConfig! {
            @source($low, $high, $self, $err) [
                $(#[$struct_meta])*
                struct $StructName => $SourceStructName { $($rest)* }
            ] -> [
                [
                    $($fields)*

                    $(#[$($field_meta)*])*
                    $field_name: $source_field_ty,
                ];
                [
                    $($merge)*
                    $field_name: $crate::config::partial::PartialConfig::merge(
                        $low.$field_name,
                        $high.$field_name,
                    ),
                ];
                [
                    $($take)*
                    let $field_name =
                        $crate::config::partial::PartialConfig::validate($self.$field_name)
                            .map_err(|mut e| {
                                e.path.insert(0, stringify!($field_name));
                                e
                            });
                ];
                [
                    $($build)*
                    $field_name: $field_name?,
                ]
            ]
        }
    };

    // Plain field: wrap the type in Option.
    (@source($low:ident, $high:ident, $self:ident, $err:ident) [
        $(#[$struct_meta:meta])*
        struct $StructName:ident => $SourceStructName:ident {
            $(#[$($field_meta:tt)*])*
            $field_name:ident: $field_ty:ty,

            $($rest:tt)*
        }
    ] -> [
        [ $($fields:tt)* ]; [ $($merge:tt)* ]; [ $($take:tt)* ]; [ $($build:tt)* ]
    ]) => {
        PartialConfig! {
            @source($low, $high, $self, $err) [
                $(#[$struct_meta])*
                struct $StructName => $SourceStructName { $($rest)* }
            ] -> [
                [
                    $($fields)*

                    $(#[$($field_meta)*])*
                    $field_name: Option<$field_ty>,
                ];
                [
                    $($merge)*
                    $field_name: $high.$field_name.or($low.$field_name),
                ];
                [
                    $($take)*
                    let $field_name = $self.$field_name.ok_or_else(|| {
                        $err.fields.push(stringify!($field_name));
                        $crate::config::partial::ValidationError {
                            fields: vec![stringify!($field_name)],
                            path: Vec::new(),
                        }
                    });
                ];
                [
                    $($build)*
                    $field_name: $field_name?,
                ]
            ]
        }
    };
}
