use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::operation::OperationKind;
use crate::schema::Schema;
use crate::types::DeprecationState;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ObjectTypeId;
use crate::types::Parameter;
use crate::types::PossibleTypes;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use crate::InternalInvariantError;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const BUILTIN_DIRECTIVE_NAMES: [&str; 4] = [
    "deprecated",
    "include",
    "skip",
    "specifiedBy",
];

const INTROSPECTION_SDL: &str = include_str!("introspection.graphql");

#[derive(Clone, Debug, PartialEq)]
struct NamedTypeDefLocation {
    def_location: loc::SourceLocation,
    type_name: String,
}

/// Utility for building a [`Schema`] from one or more SDL sources.
///
/// Type extensions are applied at [`build()`](SchemaBuilder::build) time, so
/// an `extend type` may be loaded before the definition it extends.
#[derive(Debug)]
pub struct SchemaBuilder {
    directive_defs: IndexMap<String, Directive>,
    loading_builtins: bool,
    mutation_type: Option<NamedTypeDefLocation>,
    pending_extensions: Vec<(Option<PathBuf>, ast::schema::TypeExtension)>,
    query_type: Option<NamedTypeDefLocation>,
    subscription_type: Option<NamedTypeDefLocation>,
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        self.loading_builtins = true;
        self = self.load_str(None, INTROSPECTION_SDL)?;
        self.loading_builtins = false;

        for (file_path, ext) in std::mem::take(&mut self.pending_extensions) {
            self.apply_type_extension(file_path.as_deref(), ext)?;
        }
        self.inject_missing_builtin_directives();

        let query_type = self.resolve_root_type(OperationKind::Query)?
            .ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type = self.resolve_root_type(OperationKind::Mutation)?;
        let subscription_type = self.resolve_root_type(OperationKind::Subscription)?;

        self.check_type_references()?;

        let object_type_names: IndexSet<String> = self.types.values()
            .filter_map(GraphQLType::as_object)
            .map(|obj_t| obj_t.name().to_string())
            .collect();
        let possible_types = compute_possible_types(&self.types, &object_type_names);

        log::debug!(
            "Built schema with {} types ({} object types)",
            self.types.len(),
            object_type_names.len(),
        );

        Ok(Schema {
            directive_defs: self.directive_defs,
            mutation_type,
            object_type_names,
            possible_types,
            query_type,
            subscription_type,
            types: self.types,
        })
    }

    /// Shorthand for building a schema from a single SDL string.
    pub fn from_str(
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Schema> {
        Self::new().load_str(file_path, content)?.build()
    }

    pub fn new() -> Self {
        Self {
            directive_defs: IndexMap::new(),
            loading_builtins: false,
            mutation_type: None,
            pending_extensions: vec![],
            query_type: None,
            subscription_type: None,
            types: IndexMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let ast_doc = ast::schema::parse(content)
            .map_err(|err| SchemaBuildError::ParseError {
                file: file_path.clone(),
                err: err.to_string(),
            })?;

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_deref(), def)?;
        }

        Ok(self)
    }

    fn apply_type_extension(
        &mut self,
        file_path: Option<&Path>,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;

        let (type_name, position, expected_kind) = match &ext {
            TypeExtension::Enum(e) => (&e.name, e.position, GraphQLTypeKind::Enum),
            TypeExtension::InputObject(e) => (&e.name, e.position, GraphQLTypeKind::InputObject),
            TypeExtension::Interface(e) => (&e.name, e.position, GraphQLTypeKind::Interface),
            TypeExtension::Object(e) => (&e.name, e.position, GraphQLTypeKind::Object),
            TypeExtension::Scalar(e) => (&e.name, e.position, GraphQLTypeKind::Scalar),
            TypeExtension::Union(e) => (&e.name, e.position, GraphQLTypeKind::Union),
        };
        let extension_location = loc::SourceLocation::from_pos(file_path, position);

        let Some(existing_type) = self.types.get_mut(type_name.as_str()) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                extension_location,
                type_name: type_name.to_string(),
            });
        };

        match (existing_type, ext) {
            (GraphQLType::Enum(enum_t), TypeExtension::Enum(ext)) => {
                for value in ext.values {
                    enum_t.values.insert(value.name.clone(), EnumValue {
                        def_location: loc::SourceLocation::from_pos(file_path, value.position),
                        deprecation_state: DeprecationState::from_ast_directives(&value.directives),
                        description: value.description,
                        name: value.name,
                    });
                }
            },

            (GraphQLType::InputObject(inputobj_t), TypeExtension::InputObject(ext)) => {
                for input_val in &ext.fields {
                    if let Some(existing) = inputobj_t.fields.get(input_val.name.as_str()) {
                        return Err(SchemaBuildError::DuplicateFieldDefinition {
                            field_name: input_val.name.clone(),
                            location1: existing.def_location.clone(),
                            location2: loc::SourceLocation::from_pos(file_path, input_val.position),
                            type_name: inputobj_t.name.clone(),
                        });
                    }
                    inputobj_t.fields.insert(
                        input_val.name.clone(),
                        InputField::from_ast(file_path, input_val)?,
                    );
                }
            },

            // Interface-on-interface implementations do not contribute to any
            // type's possible types, so only fields are carried over.
            (GraphQLType::Interface(iface_t), TypeExtension::Interface(ext)) =>
                extend_object_or_interface(
                    &mut iface_t.0,
                    file_path,
                    vec![],
                    &ext.fields,
                )?,

            (GraphQLType::Object(obj_t), TypeExtension::Object(ext)) =>
                extend_object_or_interface(
                    &mut obj_t.0,
                    file_path,
                    ext.implements_interfaces,
                    &ext.fields,
                )?,

            // Scalar extensions can only add directives, which the IR does not
            // track on schema types.
            (GraphQLType::Scalar(_), TypeExtension::Scalar(_)) => (),

            (GraphQLType::Union(union_t), TypeExtension::Union(ext)) =>
                union_t.members.extend(ext.types),

            (existing_type, _) => return Err(SchemaBuildError::ExtensionOfWrongTypeKind {
                expected_kind: existing_type.type_kind(),
                extension_kind: expected_kind,
                extension_location,
                type_name: existing_type.name().to_string(),
            }),
        }

        Ok(())
    }

    fn check_type_references(&self) -> Result<()> {
        let check_annot = |annot: &TypeAnnotation, location: &loc::SourceLocation| {
            let type_name = annot.innermost_type_name();
            if self.types.contains_key(type_name) {
                Ok(())
            } else {
                Err(SchemaBuildError::UndefinedTypeReference {
                    location: location.clone(),
                    type_name: type_name.to_string(),
                })
            }
        };

        let check_params = |params: &IndexMap<String, Parameter>| {
            params.values().try_for_each(|param| {
                check_annot(param.type_annotation(), param.def_location())
            })
        };

        for directive in self.directive_defs.values() {
            if let Directive::Custom { params, .. } = directive {
                check_params(params)?;
            }
        }

        for type_ in self.types.values() {
            let obj_or_iface = match type_ {
                GraphQLType::Interface(iface_t) => Some(&iface_t.0),
                GraphQLType::Object(obj_t) => Some(&obj_t.0),
                _ => None,
            };
            if let Some(data) = obj_or_iface {
                for field in data.fields.values() {
                    check_annot(field.type_annotation(), field.def_location())?;
                    check_params(field.parameters())?;
                }
                for iface_name in &data.interfaces {
                    match self.types.get(iface_name) {
                        Some(GraphQLType::Interface(_)) => (),
                        Some(_) => return Err(SchemaBuildError::ImplementsNonInterfaceType {
                            interface_name: iface_name.to_string(),
                            location: data.def_location.clone(),
                            type_name: data.name.to_string(),
                        }),
                        None => return Err(SchemaBuildError::UndefinedTypeReference {
                            location: data.def_location.clone(),
                            type_name: iface_name.to_string(),
                        }),
                    }
                }
                continue;
            }

            match type_ {
                GraphQLType::InputObject(inputobj_t) => {
                    for field in inputobj_t.fields.values() {
                        check_annot(field.type_annotation(), field.def_location())?;
                    }
                },

                GraphQLType::Union(union_t) => {
                    for member_name in union_t.member_type_names() {
                        match self.types.get(member_name) {
                            Some(GraphQLType::Object(_)) => (),
                            Some(_) => return Err(SchemaBuildError::UnionMemberNotObject {
                                location: union_t.def_location.clone(),
                                member_name: member_name.to_string(),
                                union_name: union_t.name.to_string(),
                            }),
                            None => return Err(SchemaBuildError::UndefinedTypeReference {
                                location: union_t.def_location.clone(),
                                type_name: member_name.to_string(),
                            }),
                        }
                    }
                },

                _ => (),
            }
        }

        Ok(())
    }

    fn def_location(
        &self,
        file_path: Option<&Path>,
        pos: ast::AstPos,
    ) -> loc::SourceLocation {
        if self.loading_builtins {
            loc::SourceLocation::GraphQLBuiltIn
        } else {
            loc::SourceLocation::from_pos(file_path, pos)
        }
    }

    fn inject_missing_builtin_directives(&mut self) {
        for directive in [
            Directive::Deprecated,
            Directive::Include,
            Directive::Skip,
            Directive::SpecifiedBy,
        ] {
            if !self.directive_defs.contains_key(directive.name()) {
                self.directive_defs.insert(directive.name().to_string(), directive);
            }
        }
    }

    fn insert_type(
        &mut self,
        type_name: &str,
        def_location: &loc::SourceLocation,
        type_: GraphQLType,
    ) -> Result<()> {
        if !self.loading_builtins && type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                location: def_location.clone(),
                type_name: type_name.to_string(),
            });
        }

        if let Some(existing_type) = self.types.get(type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                location1: existing_type.def_location().clone(),
                location2: def_location.clone(),
                type_name: type_name.to_string(),
            });
        }

        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    /// Resolve the root type for `operation_kind` from an explicit `schema {}`
    /// block, falling back to the conventionally-named object type.
    fn resolve_root_type(&self, operation_kind: OperationKind) -> Result<Option<String>> {
        let (explicit_def, default_name) = match operation_kind {
            OperationKind::Mutation => (&self.mutation_type, "Mutation"),
            OperationKind::Query => (&self.query_type, "Query"),
            OperationKind::Subscription => (&self.subscription_type, "Subscription"),
        };

        let Some(explicit_def) = explicit_def else {
            return Ok(match self.types.get(default_name) {
                Some(GraphQLType::Object(_)) => Some(default_name.to_string()),
                _ => None,
            });
        };

        match self.types.get(explicit_def.type_name.as_str()) {
            Some(GraphQLType::Object(_)) => Ok(Some(explicit_def.type_name.clone())),
            Some(type_) => Err(SchemaBuildError::RootTypeNotObject {
                location: explicit_def.def_location.clone(),
                operation_kind,
                type_kind: type_.type_kind(),
                type_name: explicit_def.type_name.clone(),
            }),
            None => Err(SchemaBuildError::UndefinedRootType {
                location: explicit_def.def_location.clone(),
                operation_kind,
                type_name: explicit_def.type_name.clone(),
            }),
        }
    }

    fn visit_ast_def(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::DirectiveDefinition(directive_def) =>
                self.visit_ast_directive_def(file_path, directive_def),
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) => {
                self.pending_extensions.push((file_path.map(Path::to_path_buf), type_ext));
                Ok(())
            },
        }
    }

    fn visit_ast_directive_def(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        let def_location = self.def_location(file_path, def.position);

        if BUILTIN_DIRECTIVE_NAMES.contains(&def.name.as_str()) {
            return Err(SchemaBuildError::RedefinitionOfBuiltinDirective {
                directive_name: def.name,
                location: def_location,
            });
        }

        if def.name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedDirectiveName {
                directive_name: def.name,
                location: def_location,
            });
        }

        if let Some(existing_directive) = self.directive_defs.get(def.name.as_str()) {
            let location1 = match existing_directive {
                Directive::Custom { def_location, .. } => def_location.clone(),
                _ => loc::SourceLocation::GraphQLBuiltIn,
            };
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: def.name,
                location1,
                location2: def_location,
            });
        }

        let params: IndexMap<String, Parameter> = def.arguments.iter()
            .map(|input_val| Ok((
                input_val.name.clone(),
                Parameter::from_ast(file_path, input_val)?,
            )))
            .collect::<std::result::Result<_, InternalInvariantError>>()?;

        self.directive_defs.insert(def.name.clone(), Directive::Custom {
            def_location,
            description: def.description,
            name: def.name,
            params,
            repeatable: def.repeatable,
        });

        Ok(())
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: Option<&Path>,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let def_location = self.def_location(file_path, schema_def.position);

        for (operation_kind, type_name) in [
            (OperationKind::Query, schema_def.query),
            (OperationKind::Mutation, schema_def.mutation),
            (OperationKind::Subscription, schema_def.subscription),
        ] {
            let Some(type_name) = type_name else {
                continue;
            };

            let slot = match operation_kind {
                OperationKind::Mutation => &mut self.mutation_type,
                OperationKind::Query => &mut self.query_type,
                OperationKind::Subscription => &mut self.subscription_type,
            };

            if let Some(existing_def) = slot {
                return Err(SchemaBuildError::DuplicateRootTypeDefinition {
                    location1: existing_def.def_location.clone(),
                    location2: def_location,
                    operation_kind,
                });
            }

            *slot = Some(NamedTypeDefLocation {
                def_location: def_location.clone(),
                type_name,
            });
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: Option<&Path>,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;

        match type_def {
            TypeDefinition::Enum(enum_def) => {
                let def_location = self.def_location(file_path, enum_def.position);
                let values = enum_def.values.into_iter()
                    .map(|value| (value.name.clone(), EnumValue {
                        def_location: self.def_location(file_path, value.position),
                        deprecation_state: DeprecationState::from_ast_directives(&value.directives),
                        description: value.description,
                        name: value.name,
                    }))
                    .collect();
                self.insert_type(
                    &enum_def.name,
                    &def_location,
                    GraphQLType::Enum(Box::new(EnumType {
                        def_location: def_location.clone(),
                        description: enum_def.description,
                        name: enum_def.name.clone(),
                        values,
                    })),
                )
            },

            TypeDefinition::InputObject(inputobj_def) => {
                let def_location = self.def_location(file_path, inputobj_def.position);
                let mut fields: IndexMap<String, InputField> = IndexMap::new();
                for input_val in &inputobj_def.fields {
                    if let Some(existing) = fields.get(input_val.name.as_str()) {
                        return Err(SchemaBuildError::DuplicateFieldDefinition {
                            field_name: input_val.name.clone(),
                            location1: existing.def_location.clone(),
                            location2: loc::SourceLocation::from_pos(file_path, input_val.position),
                            type_name: inputobj_def.name.clone(),
                        });
                    }
                    fields.insert(
                        input_val.name.clone(),
                        InputField::from_ast(file_path, input_val)?,
                    );
                }
                self.insert_type(
                    &inputobj_def.name,
                    &def_location,
                    GraphQLType::InputObject(Box::new(InputObjectType {
                        def_location: def_location.clone(),
                        description: inputobj_def.description,
                        fields,
                        name: inputobj_def.name.clone(),
                    })),
                )
            },

            TypeDefinition::Interface(iface_def) => {
                let def_location = self.def_location(file_path, iface_def.position);
                let mut data = ObjectOrInterfaceTypeData {
                    def_location: def_location.clone(),
                    description: iface_def.description,
                    fields: IndexMap::new(),
                    interfaces: vec![],
                    name: iface_def.name.clone(),
                };
                extend_object_or_interface(
                    &mut data,
                    file_path,
                    iface_def.implements_interfaces,
                    &iface_def.fields,
                )?;
                self.insert_type(
                    &iface_def.name,
                    &def_location,
                    GraphQLType::Interface(Box::new(InterfaceType(data))),
                )
            },

            TypeDefinition::Object(obj_def) => {
                let def_location = self.def_location(file_path, obj_def.position);
                let mut data = ObjectOrInterfaceTypeData {
                    def_location: def_location.clone(),
                    description: obj_def.description,
                    fields: IndexMap::new(),
                    interfaces: vec![],
                    name: obj_def.name.clone(),
                };
                extend_object_or_interface(
                    &mut data,
                    file_path,
                    obj_def.implements_interfaces,
                    &obj_def.fields,
                )?;
                self.insert_type(
                    &obj_def.name,
                    &def_location,
                    GraphQLType::Object(Box::new(ObjectType(data))),
                )
            },

            TypeDefinition::Scalar(scalar_def) => {
                let def_location = self.def_location(file_path, scalar_def.position);
                self.insert_type(
                    &scalar_def.name,
                    &def_location,
                    GraphQLType::Scalar(Box::new(ScalarType {
                        def_location: def_location.clone(),
                        description: scalar_def.description,
                        name: scalar_def.name.clone(),
                    })),
                )
            },

            TypeDefinition::Union(union_def) => {
                let def_location = self.def_location(file_path, union_def.position);
                self.insert_type(
                    &union_def.name,
                    &def_location,
                    GraphQLType::Union(Box::new(UnionType {
                        def_location: def_location.clone(),
                        description: union_def.description,
                        members: union_def.types.into_iter().collect(),
                        name: union_def.name.clone(),
                    })),
                )
            },
        }
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn compute_possible_types(
    types: &IndexMap<String, GraphQLType>,
    object_type_names: &IndexSet<String>,
) -> HashMap<String, PossibleTypes> {
    let num_object_types = object_type_names.len();
    let mut possible_types: HashMap<String, PossibleTypes> = types.values()
        .filter(|type_| type_.is_composite())
        .map(|type_| (type_.name().to_string(), PossibleTypes::empty(num_object_types)))
        .collect();

    for (idx, obj_name) in object_type_names.iter().enumerate() {
        let id = ObjectTypeId::from(idx);
        let Some(obj_t) = types.get(obj_name).and_then(GraphQLType::as_object) else {
            continue;
        };

        for type_name in std::iter::once(obj_t.name()).chain(
            obj_t.interface_names().iter().map(String::as_str)
        ) {
            if let Some(set) = possible_types.get_mut(type_name) {
                set.insert(id);
            }
        }
    }

    for union_t in types.values().filter_map(GraphQLType::as_union) {
        let members = PossibleTypes::from_ids(
            num_object_types,
            union_t.member_type_names()
                .filter_map(|name| object_type_names.get_index_of(name))
                .map(ObjectTypeId::from),
        );
        possible_types.insert(union_t.name().to_string(), members);
    }

    possible_types
}

fn extend_object_or_interface(
    data: &mut ObjectOrInterfaceTypeData,
    file_path: Option<&Path>,
    implements_interfaces: Vec<String>,
    ast_fields: &[ast::schema::Field],
) -> Result<()> {
    for iface_name in implements_interfaces {
        if !data.interfaces.contains(&iface_name) {
            data.interfaces.push(iface_name);
        }
    }

    for ast_field in ast_fields {
        if let Some(existing_field) = data.fields.get(ast_field.name.as_str()) {
            return Err(SchemaBuildError::DuplicateFieldDefinition {
                field_name: ast_field.name.clone(),
                location1: existing_field.def_location().clone(),
                location2: loc::SourceLocation::from_pos(file_path, ast_field.position),
                type_name: data.name.clone(),
            });
        }
        data.fields.insert(ast_field.name.clone(), Field::from_ast(file_path, ast_field)?);
    }

    Ok(())
}

#[derive(Debug, Error)]
pub enum SchemaBuildError {
    #[error(
        "The `@{directive_name}` directive is defined more than once: \
        {location1} and {location2}"
    )]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
    },

    #[error(
        "Field `{type_name}.{field_name}` is defined more than once: \
        {location1} and {location2}"
    )]
    DuplicateFieldDefinition {
        field_name: String,
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "The {operation_kind:?} root type is declared more than once: \
        {location1} and {location2}"
    )]
    DuplicateRootTypeDefinition {
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
        operation_kind: OperationKind,
    },

    #[error(
        "Type `{type_name}` is defined more than once: {location1} and \
        {location2}"
    )]
    DuplicateTypeDefinition {
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
        type_name: String,
    },

    #[error("Attempted to extend undefined type `{type_name}` (at {extension_location})")]
    ExtensionOfUndefinedType {
        extension_location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Attempted to extend {expected_kind:?} type `{type_name}` with a \
        {extension_kind:?} extension (at {extension_location})"
    )]
    ExtensionOfWrongTypeKind {
        expected_kind: GraphQLTypeKind,
        extension_kind: GraphQLTypeKind,
        extension_location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Type `{type_name}` declares that it implements `{interface_name}`, \
        which is not an interface type (at {location})"
    )]
    ImplementsNonInterfaceType {
        interface_name: String,
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error("Custom directive names must not start with `__` (at {location})")]
    InvalidDunderPrefixedDirectiveName {
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error("Type names must not start with `__` (at {location})")]
    InvalidDunderPrefixedTypeName {
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error(transparent)]
    InvalidValue(#[from] InternalInvariantError),

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error(
        "Error parsing schema{}: {err}",
        file.as_ref().map(|f| format!(" `{}`", f.display())).unwrap_or_default(),
    )]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error("Attempted to redefine builtin directive `@{directive_name}` (at {location})")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error(
        "The {operation_kind:?} root type `{type_name}` is a {type_kind:?} \
        type, but root types must be object types (at {location})"
    )]
    RootTypeNotObject {
        location: loc::SourceLocation,
        operation_kind: OperationKind,
        type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),

    #[error(
        "The {operation_kind:?} root type is declared as `{type_name}`, but no \
        such type is defined (at {location})"
    )]
    UndefinedRootType {
        location: loc::SourceLocation,
        operation_kind: OperationKind,
        type_name: String,
    },

    #[error("Reference to undefined type `{type_name}` (at {location})")]
    UndefinedTypeReference {
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Union `{union_name}` includes `{member_name}`, which is not an object \
        type (at {location})"
    )]
    UnionMemberNotObject {
        location: loc::SourceLocation,
        member_name: String,
        union_name: String,
    },
}
