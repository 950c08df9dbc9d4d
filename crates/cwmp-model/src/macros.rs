// ── Node type generator ──
//
// Every object of every data model is declared with `cwmp_object!`:
//
// ```ignore
// cwmp_object! {
//     /// WPS configuration of a WLAN.
//     pub struct Wps("WPS", "InternetGatewayDevice.LANDevice.{i}.WLANConfiguration.{i}.WPS.") {
//         param enable: bool = "Enable" [rw] default false;
//         param uuid: String = "UUID" [ro, size(0, 36), pattern(UUID_PATTERN)];
//         table registrar: Registrar = "Registrar" counted "RegistrarNumberOfEntries";
//     }
// }
// ```
//
// Grammar, in order: `param` lines, then `object` lines, then `table`
// lines. A param line lists the field, its Rust type, the standard's
// name, `[access, builder(args)...]` (any `ParamInfo` const builder) and
// an optional default literal. A table line may name the computed
// `NumberOfEntries` parameter with `counted`. `[keys: "A", "B"]` after
// the header declares per-table unique keys.
//
// The macro expands to the struct (serde-renamed to the standard's
// names), a `Default` impl carrying declared defaults, typed accessors
// (`x()`, `set_x()`, `with_x()`, `x_mut()` for children) and the `Node`
// impl used by the generic walkers.

macro_rules! cwmp_object {
    (@default $ty:ty) => {
        None
    };
    (@default $ty:ty, $default:expr) => {
        Some(<$ty as $crate::value::ParamKind>::from_literal($default))
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($object:literal, $schema:literal)
        $([keys: $($key:literal),+])?
        {
            $(
                $(#[$pmeta:meta])*
                param $field:ident: $ty:ty = $pname:literal
                    [$access:ident $(, $opt:ident($($arg:expr),*))*]
                    $(default $default:expr)?;
            )*
            $(
                object $ofield:ident: $oty:ty = $oname:literal;
            )*
            $(
                table $tfield:ident: $tty:ty = $tname:literal $(counted $count:literal)?;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(default)]
        $vis struct $name {
            $(
                #[serde(rename = $pname, skip_serializing_if = "Option::is_none")]
                $field: Option<$ty>,
            )*
            $(
                #[serde(rename = $oname, skip_serializing_if = "Option::is_none")]
                $ofield: Option<$oty>,
            )*
            $(
                #[serde(rename = $tname, skip_serializing_if = "crate::table::Table::is_empty")]
                $tfield: $crate::table::Table<$tty>,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $( $field: $crate::macros::cwmp_object!(@default $ty $(, $default)?), )*
                    $( $ofield: None, )*
                    $( $tfield: $crate::table::Table::new(), )*
                }
            }
        }

        ::paste::paste! {
            impl $name {
                /// Path template of this object in its defining document.
                pub const SCHEMA_PATH: &'static str = $schema;

                /// Descriptors of the object's leaf parameters.
                pub const PARAMS: &'static [$crate::param::ParamInfo] = &[
                    $(
                        $crate::param::ParamInfo::new(
                            $pname,
                            <$ty as $crate::value::ParamKind>::TYPE,
                        )
                        .$access()
                        $( .$opt($($arg),*) )*,
                    )*
                    $($(
                        $crate::param::ParamInfo::new(
                            $count,
                            $crate::value::ParamType::UnsignedInt,
                        )
                        .ro()
                        .computed(),
                    )?)*
                ];

                $(
                    $(#[$pmeta])*
                    pub fn $field(&self) -> Option<&$ty> {
                        self.$field.as_ref()
                    }

                    pub fn [<set_ $field>](&mut self, value: $ty) {
                        self.$field = Some(value);
                    }

                    pub fn [<with_ $field>](mut self, value: $ty) -> Self {
                        self.$field = Some(value);
                        self
                    }
                )*

                $(
                    pub fn $ofield(&self) -> Option<&$oty> {
                        self.$ofield.as_ref()
                    }

                    pub fn [<$ofield _mut>](&mut self) -> &mut $oty {
                        self.$ofield.get_or_insert_with(<$oty as Default>::default)
                    }

                    pub fn [<with_ $ofield>](mut self, value: $oty) -> Self {
                        self.$ofield = Some(value);
                        self
                    }
                )*

                $(
                    pub fn $tfield(&self) -> &$crate::table::Table<$tty> {
                        &self.$tfield
                    }

                    pub fn [<$tfield _mut>](&mut self) -> &mut $crate::table::Table<$tty> {
                        &mut self.$tfield
                    }

                    pub fn [<with_ $tfield>](mut self, entry: $tty) -> Self {
                        self.$tfield.push(entry);
                        self
                    }
                )*
            }
        }

        impl $crate::node::Node for $name {
            fn object_name(&self) -> &'static str {
                $object
            }

            fn schema_path(&self) -> &'static str {
                $schema
            }

            fn params(&self) -> &'static [$crate::param::ParamInfo] {
                Self::PARAMS
            }

            fn children(&self) -> &'static [$crate::node::ChildInfo] {
                const CHILDREN: &[$crate::node::ChildInfo] = &[
                    $( $crate::node::ChildInfo::object($oname), )*
                    $( $crate::node::ChildInfo::table($tname), )*
                ];
                CHILDREN
            }

            fn unique_keys(&self) -> &'static [&'static str] {
                &[$($($key),+)?]
            }

            fn param(
                &self,
                name: &str,
            ) -> Result<Option<$crate::value::Value>, $crate::error::ModelError> {
                match name {
                    $(
                        $pname => Ok(self
                            .$field
                            .as_ref()
                            .map($crate::value::ParamKind::to_value)),
                    )*
                    $($(
                        $count => Ok(Some($crate::value::Value::UnsignedInt(
                            self.$tfield.count(),
                        ))),
                    )?)*
                    _ => Err($crate::error::ModelError::UnknownParameter {
                        object: $schema.to_owned(),
                        name: name.to_owned(),
                    }),
                }
            }

            fn set_param(
                &mut self,
                name: &str,
                value: $crate::value::Value,
            ) -> Result<(), $crate::error::ModelError> {
                match name {
                    $(
                        $pname => {
                            let typed = <$ty as $crate::value::ParamKind>::from_value(value)
                                .ok_or_else(|| $crate::error::ModelError::TypeMismatch {
                                    name: name.to_owned(),
                                    expected: <$ty as $crate::value::ParamKind>::TYPE,
                                })?;
                            self.$field = Some(typed);
                            Ok(())
                        }
                    )*
                    $($(
                        $count => Err($crate::error::ModelError::NotWritable {
                            path: name.to_owned(),
                        }),
                    )?)*
                    _ => {
                        let _ = value;
                        Err($crate::error::ModelError::UnknownParameter {
                            object: $schema.to_owned(),
                            name: name.to_owned(),
                        })
                    }
                }
            }

            fn child(&self, name: &str) -> Option<$crate::node::Child<'_>> {
                match name {
                    $(
                        $oname => self
                            .$ofield
                            .as_ref()
                            .map(|node| $crate::node::Child::Object(node)),
                    )*
                    $(
                        $tname => Some($crate::node::Child::Table(&self.$tfield)),
                    )*
                    _ => None,
                }
            }

            fn child_mut(&mut self, name: &str) -> Option<$crate::node::ChildMut<'_>> {
                match name {
                    $(
                        $oname => Some($crate::node::ChildMut::Object(
                            self.$ofield.get_or_insert_with(<$oty as Default>::default),
                        )),
                    )*
                    $(
                        $tname => Some($crate::node::ChildMut::Table(&mut self.$tfield)),
                    )*
                    _ => None,
                }
            }

            fn template(&self, name: &str) -> Option<Box<dyn $crate::node::Node>> {
                match name {
                    $( $oname => Some(Box::new(<$oty as Default>::default())), )*
                    $( $tname => Some(Box::new(<$tty as Default>::default())), )*
                    _ => None,
                }
            }
        }
    };
}

pub(crate) use cwmp_object;
