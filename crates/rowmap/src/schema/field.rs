use super::Access;
use crate::adapter::{
    BoundColumn, BuildCx, ColumnOps, EmbeddedOps, LiftedColumn, LiftedEmbedded, OptionalEmbedded,
    RequiredEmbedded,
};
use crate::{Mapper, Model};

use rowmap_core::{Result, TypeAdapters};

use std::sync::Arc;

type BindColumn<M> = Arc<dyn Fn(&TypeAdapters) -> Option<Arc<dyn ColumnOps<M>>> + Send + Sync>;

type BindEmbedded<M> =
    Arc<dyn Fn(&Mapper, &mut BuildCx) -> Result<Arc<dyn EmbeddedOps<M>>> + Send + Sync>;

/// One field discovered on a mapped type.
pub struct Field<M> {
    /// The field name
    pub name: &'static str,

    /// Name of the field's value type
    pub ty: &'static str,

    /// Name of the type that declares the field. For inherited fields this is
    /// the base type, not the type being mapped.
    pub declared_in: &'static str,

    /// Base hops taken from the mapped type to the field's container. Empty
    /// for the type's own fields.
    pub path: Vec<&'static str>,

    /// How the field maps to columns
    pub mapping: Mapping<M>,
}

pub enum Mapping<M> {
    /// The field holds a single column value
    Column(Column<M>),

    /// The field holds a nested mapped type whose columns are flattened into
    /// the parent row
    Embedded(Embedded<M>),

    /// The field is not mapped
    Unmapped,
}

/// Declaration of a column mapping on a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnAttr {
    /// Column name. Must not be empty.
    pub name: String,

    /// The column is read but never written.
    pub readonly: bool,

    /// A null value is left out of written rows so the store applies its
    /// default. Only valid on nullable fields.
    pub treat_null_as_default: bool,
}

pub struct Column<M> {
    attr: ColumnAttr,
    bind: BindColumn<M>,
}

pub struct Embedded<M> {
    optional: bool,
    bind: BindEmbedded<M>,
}

impl<M: 'static> Field<M> {
    /// A field mapped to the column described by `attr`.
    pub fn column<T: 'static>(
        name: &'static str,
        attr: ColumnAttr,
        get: fn(&M) -> &T,
        get_mut: fn(&mut M) -> &mut T,
    ) -> Field<M> {
        let access = Access::new(get, get_mut);
        let bind: BindColumn<M> = Arc::new(move |adapters: &TypeAdapters| {
            let adapter = adapters.get::<T>()?;
            Some(Arc::new(BoundColumn::new(adapter, access)) as Arc<dyn ColumnOps<M>>)
        });

        Field::new::<T>(name, Mapping::Column(Column { attr, bind }))
    }

    /// A field holding an embedded type that is always present.
    pub fn embedded<E: Model>(
        name: &'static str,
        get: fn(&M) -> &E,
        get_mut: fn(&mut M) -> &mut E,
    ) -> Field<M> {
        let access = Access::new(get, get_mut);
        let bind: BindEmbedded<M> = Arc::new(move |mapper: &Mapper, cx: &mut BuildCx| {
            let adapter = mapper.adapter_in::<E>(cx)?;
            Ok(Arc::new(RequiredEmbedded::new(adapter, access)) as Arc<dyn EmbeddedOps<M>>)
        });

        Field::new::<E>(
            name,
            Mapping::Embedded(Embedded {
                optional: false,
                bind,
            }),
        )
    }

    /// A field holding an embedded type that may be absent.
    pub fn embedded_optional<E: Model>(
        name: &'static str,
        get: fn(&M) -> &Option<E>,
        get_mut: fn(&mut M) -> &mut Option<E>,
    ) -> Field<M> {
        let access = Access::new(get, get_mut);
        let bind: BindEmbedded<M> = Arc::new(move |mapper: &Mapper, cx: &mut BuildCx| {
            let adapter = mapper.adapter_in::<E>(cx)?;
            Ok(Arc::new(OptionalEmbedded::new(adapter, access)) as Arc<dyn EmbeddedOps<M>>)
        });

        Field::new::<Option<E>>(
            name,
            Mapping::Embedded(Embedded {
                optional: true,
                bind,
            }),
        )
    }

    /// A field that takes no part in the mapping.
    pub fn unmapped<T: ?Sized>(name: &'static str) -> Field<M> {
        Field::new::<T>(name, Mapping::Unmapped)
    }

    fn new<T: ?Sized>(name: &'static str, mapping: Mapping<M>) -> Field<M> {
        Field {
            name,
            ty: std::any::type_name::<T>(),
            declared_in: "",
            path: vec![],
            mapping,
        }
    }

    pub fn is_mapped(&self) -> bool {
        !matches!(self.mapping, Mapping::Unmapped)
    }

    /// `Type::field`, used to name the field in errors.
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.declared_in, self.name)
    }

    /// Re-roots the field at `M2`, reaching this field's container through
    /// the base field `hop`.
    pub(crate) fn lift<M2: 'static>(self, hop: &'static str, access: Access<M2, M>) -> Field<M2> {
        let mapping = match self.mapping {
            Mapping::Column(Column { attr, bind }) => {
                let bind: BindColumn<M2> = Arc::new(move |adapters: &TypeAdapters| {
                    let inner = bind(adapters)?;
                    Some(Arc::new(LiftedColumn::new(access, inner)) as Arc<dyn ColumnOps<M2>>)
                });
                Mapping::Column(Column { attr, bind })
            }
            Mapping::Embedded(Embedded { optional, bind }) => {
                let bind: BindEmbedded<M2> = Arc::new(move |mapper: &Mapper, cx: &mut BuildCx| {
                    let inner = bind(mapper, cx)?;
                    Ok(Arc::new(LiftedEmbedded::new(access, inner)) as Arc<dyn EmbeddedOps<M2>>)
                });
                Mapping::Embedded(Embedded { optional, bind })
            }
            Mapping::Unmapped => Mapping::Unmapped,
        };

        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.push(hop);
        path.extend(self.path);

        Field {
            name: self.name,
            ty: self.ty,
            declared_in: self.declared_in,
            path,
            mapping,
        }
    }
}

impl ColumnAttr {
    pub fn new(name: impl Into<String>) -> ColumnAttr {
        ColumnAttr {
            name: name.into(),
            readonly: false,
            treat_null_as_default: false,
        }
    }

    pub fn readonly(mut self) -> ColumnAttr {
        self.readonly = true;
        self
    }

    pub fn treat_null_as_default(mut self) -> ColumnAttr {
        self.treat_null_as_default = true;
        self
    }
}

impl<M> Column<M> {
    pub fn attr(&self) -> &ColumnAttr {
        &self.attr
    }

    /// Resolves the field's type adapter. `None` if the value type has no
    /// registered adapter.
    pub(crate) fn bind(&self, adapters: &TypeAdapters) -> Option<Arc<dyn ColumnOps<M>>> {
        (self.bind)(adapters)
    }
}

impl<M> Embedded<M> {
    /// True for `Option<E>` fields.
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub(crate) fn bind(&self, mapper: &Mapper, cx: &mut BuildCx) -> Result<Arc<dyn EmbeddedOps<M>>> {
        (self.bind)(mapper, cx)
    }
}

impl<M> core::fmt::Debug for Field<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("declared_in", &self.declared_in)
            .field("path", &self.path)
            .field("mapping", &self.mapping)
            .finish()
    }
}

impl<M> core::fmt::Debug for Mapping<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Mapping::Column(column) => f.debug_tuple("Column").field(&column.attr).finish(),
            Mapping::Embedded(embedded) => f
                .debug_struct("Embedded")
                .field("optional", &embedded.optional)
                .finish(),
            Mapping::Unmapped => f.write_str("Unmapped"),
        }
    }
}
