use super::{Access, Field};

/// Describes how a type maps to row columns.
pub struct Model<M> {
    /// Name of the type
    pub name: &'static str,

    /// Every field in discovery order: own fields first, then the fields of
    /// the base type
    pub fields: Vec<Field<M>>,

    /// Creates an empty instance. Without one, the type can be filled and
    /// written but not created by the mapper.
    pub constructor: Option<fn() -> M>,
}

/// Assembles a [`Model`] descriptor.
pub struct ModelBuilder<M> {
    name: &'static str,
    fields: Vec<Field<M>>,
    inherited: Vec<Field<M>>,
    constructor: Option<fn() -> M>,
}

impl<M: 'static> Model<M> {
    pub fn builder(name: &'static str) -> ModelBuilder<M> {
        ModelBuilder {
            name,
            fields: vec![],
            inherited: vec![],
            constructor: None,
        }
    }

    /// Find a field by name. Own fields shadow inherited ones.
    pub fn field_by_name(&self, name: &str) -> Option<&Field<M>> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn mapped_fields(&self) -> impl Iterator<Item = &Field<M>> {
        self.fields.iter().filter(|field| field.is_mapped())
    }
}

impl<M: 'static> ModelBuilder<M> {
    /// Declares a field of the type itself.
    pub fn field(mut self, mut field: Field<M>) -> Self {
        field.declared_in = self.name;
        self.fields.push(field);
        self
    }

    /// Declares `name` as the base of the type. The fields of `B` are
    /// inherited and listed after every field declared with
    /// [`field`](Self::field).
    pub fn base<B: crate::Model>(
        mut self,
        name: &'static str,
        get: fn(&M) -> &B,
        get_mut: fn(&mut M) -> &mut B,
    ) -> Self {
        let access = Access::new(get, get_mut);
        self.inherited.extend(
            B::schema()
                .fields
                .into_iter()
                .map(|field| field.lift(name, access)),
        );
        self
    }

    pub fn constructor(mut self, constructor: fn() -> M) -> Self {
        self.constructor = Some(constructor);
        self
    }

    pub fn build(self) -> Model<M> {
        let mut fields = self.fields;
        fields.extend(self.inherited);

        Model {
            name: self.name,
            fields,
            constructor: self.constructor,
        }
    }
}

impl<M> core::fmt::Debug for Model<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Model")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .field("constructor", &self.constructor.is_some())
            .finish()
    }
}
