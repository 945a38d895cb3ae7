use crate::ast;
use crate::loc;
use crate::operation::CompiledDocument;
use crate::operation::FieldSelection;
use crate::operation::Fragment;
use crate::operation::FragmentId;
use crate::operation::FragmentSpreadSelection;
use crate::operation::FragmentTable;
use crate::operation::InlineFragmentSelection;
use crate::operation::Operation;
use crate::operation::OperationKind;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::operation::Variable;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::PossibleTypes;
use crate::types::TypeAnnotation;
use crate::Argument;
use crate::CompileError;
use crate::DirectiveAnnotation;
use crate::InternalInvariantError;
use crate::ReferencedTypeSet;
use crate::SchemaReferenceError;
use crate::StructuralError;
use crate::Value;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

type Result<T> = std::result::Result<T, CompileError>;

/// A parsed executable document along with the file it was read from, if
/// any.
#[derive(Clone, Copy, Debug)]
pub struct SourceDocument<'doc> {
    pub document: &'doc ast::operation::Document,
    pub file_path: Option<&'doc Path>,
}

/// Compiles executable documents against a [`Schema`].
///
/// The compiler itself holds no per-document state: every call to
/// [`compile()`](DocumentCompiler::compile) works against its own fragment
/// cache and referenced-type set, so one compiler (or one schema) can serve
/// any number of concurrent compiles.
#[derive(Clone, Copy, Debug)]
pub struct DocumentCompiler<'schema> {
    schema: &'schema Schema,
}
impl<'schema> DocumentCompiler<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self {
            schema,
        }
    }

    pub fn compile(
        &self,
        document: &ast::operation::Document,
        file_path: Option<&Path>,
    ) -> Result<CompiledDocument> {
        self.compile_many(&[SourceDocument {
            document,
            file_path,
        }])
    }

    /// Compile several documents as one unit: fragments defined in any of
    /// them may be spread from any other.
    pub fn compile_many(&self, documents: &[SourceDocument<'_>]) -> Result<CompiledDocument> {
        CompileContext::new(self.schema).compile(documents)
    }

    /// Parse `content` as an executable document and compile it.
    pub fn compile_str(
        &self,
        file_path: Option<&Path>,
        content: &str,
    ) -> Result<CompiledDocument> {
        let document = ast::operation::parse(content)?;
        self.compile(&document, file_path)
    }
}

/// Helper function that compiles a single document with no associated file.
pub fn compile(
    schema: &Schema,
    document: &ast::operation::Document,
) -> Result<CompiledDocument> {
    DocumentCompiler::new(schema).compile(document, None)
}

struct PendingFragment<'doc> {
    def: &'doc ast::operation::FragmentDefinition,
    file_path: Option<&'doc Path>,
}

/// State owned by a single compile call.
struct CompileContext<'schema, 'doc> {
    fragments: FragmentTable,
    fragments_in_progress: HashSet<String>,
    pending_fragments: IndexMap<String, PendingFragment<'doc>>,
    referenced_types: ReferencedTypeSet,
    schema: &'schema Schema,
}
impl<'schema, 'doc> CompileContext<'schema, 'doc> {
    fn new(schema: &'schema Schema) -> Self {
        Self {
            fragments: FragmentTable::new(),
            fragments_in_progress: HashSet::new(),
            pending_fragments: IndexMap::new(),
            referenced_types: ReferencedTypeSet::new(),
            schema,
        }
    }

    fn compile(mut self, documents: &[SourceDocument<'doc>]) -> Result<CompiledDocument> {
        for source_doc in documents {
            let document: &'doc ast::operation::Document = source_doc.document;
            for def in &document.definitions {
                let ast::operation::Definition::Fragment(frag_def) = def else {
                    continue;
                };
                if let Some(existing) = self.pending_fragments.get(frag_def.name.as_str()) {
                    return Err(StructuralError::DuplicateFragmentDefinition {
                        fragment_name: frag_def.name.clone(),
                        location1: loc::SourceLocation::from_pos(
                            existing.file_path,
                            existing.def.position,
                        ),
                        location2: loc::SourceLocation::from_pos(
                            source_doc.file_path,
                            frag_def.position,
                        ),
                    }.into());
                }
                self.pending_fragments.insert(frag_def.name.clone(), PendingFragment {
                    def: frag_def,
                    file_path: source_doc.file_path,
                });
            }
        }

        let mut operations: Vec<Operation> = vec![];
        for source_doc in documents {
            let document: &'doc ast::operation::Document = source_doc.document;
            for def in &document.definitions {
                let ast::operation::Definition::Operation(op_def) = def else {
                    continue;
                };
                let operation = self.compile_operation(source_doc.file_path, op_def)?;
                if let Some(existing) = operations.iter().find(|op| op.name == operation.name) {
                    return Err(StructuralError::DuplicateOperationName {
                        location1: existing.def_location.clone(),
                        location2: operation.def_location,
                        operation_name: operation.name,
                    }.into());
                }
                operations.push(operation);
            }
        }

        while let Some((fragment_name, pending)) = self.pending_fragments.first() {
            log::trace!("Compiling fragment `{fragment_name}`, which no operation spreads");
            let fragment_name = fragment_name.clone();
            let location = loc::SourceLocation::from_pos(pending.file_path, pending.def.position);
            self.get_fragment(fragment_name.as_str(), &location)?;
        }

        Ok(CompiledDocument {
            fragments: self.fragments,
            operations,
            referenced_types: self.referenced_types,
        })
    }

    fn compile_field(
        &mut self,
        file_path: Option<&Path>,
        ast_field: &ast::operation::Field,
        parent_type: &'schema GraphQLType,
    ) -> Result<FieldSelection> {
        let schema = self.schema;
        let def_location = loc::SourceLocation::from_pos(file_path, ast_field.position);

        let field_def = schema.field_definition(parent_type, ast_field.name.as_str())?
            .ok_or_else(|| SchemaReferenceError::UndefinedField {
                field_name: ast_field.name.clone(),
                location: def_location.clone(),
                parent_type_name: parent_type.name().to_string(),
            })?;

        let type_annotation = field_def.type_annotation().clone();
        let field_type_name = type_annotation.innermost_type_name().to_string();
        let field_type = lookup_schema_type(schema, field_type_name.as_str())?;
        self.referenced_types.add(schema, field_type_name.as_str())?;

        let arguments = ast_field.arguments.iter()
            .map(|(arg_name, ast_value)| Ok(Argument {
                name: arg_name.clone(),
                type_annotation: field_def.parameters()
                    .get(arg_name.as_str())
                    .map(|param| param.type_annotation().clone()),
                value: Value::from_ast(ast_value)?,
            }))
            .collect::<Result<Vec<_>>>()?;

        let directives = DirectiveAnnotation::from_ast_list(
            schema,
            file_path,
            &ast_field.directives,
        )?;

        let has_selection_set = !ast_field.selection_set.items.is_empty();
        let selection_set = match (field_type.is_composite(), has_selection_set) {
            (true, true) => {
                let possible_types = possible_types_for(schema, field_type_name.as_str())?;
                Some(self.compile_selection_set(
                    file_path,
                    &ast_field.selection_set,
                    field_type_name.as_str(),
                    possible_types,
                    &mut HashSet::new(),
                )?)
            },

            (true, false) => return Err(StructuralError::MissingSelectionSet {
                field_name: ast_field.name.clone(),
                field_type_name,
                location: def_location,
                parent_type_name: parent_type.name().to_string(),
            }.into()),

            (false, true) => return Err(StructuralError::SelectionSetOnLeafField {
                field_name: ast_field.name.clone(),
                field_type_name,
                location: def_location,
            }.into()),

            (false, false) => None,
        };

        Ok(FieldSelection {
            alias: ast_field.alias.clone(),
            arguments,
            def_location,
            deprecation_reason: field_def.deprecation_state().reason().map(str::to_string),
            description: field_def.description().map(str::to_string),
            directives,
            name: ast_field.name.clone(),
            parent_type: parent_type.name().to_string(),
            selection_set,
            type_annotation,
        })
    }

    fn compile_fragment(&mut self, pending: PendingFragment<'doc>) -> Result<Fragment> {
        let PendingFragment { def, file_path } = pending;
        let schema = self.schema;
        log::debug!("Compiling fragment `{}`", def.name);

        let def_location = loc::SourceLocation::from_pos(file_path, def.position);
        let ast::operation::TypeCondition::On(type_name) = &def.type_condition;
        self.check_type_condition(type_name.as_str(), &def_location)?;
        let possible_types = possible_types_for(schema, type_name.as_str())?;

        let directives = DirectiveAnnotation::from_ast_list(schema, file_path, &def.directives)?;
        let selection_set = self.compile_selection_set(
            file_path,
            &def.selection_set,
            type_name.as_str(),
            possible_types,
            &mut HashSet::new(),
        )?;

        Ok(Fragment {
            def_location,
            directives,
            file_path: file_path.map(Path::to_path_buf),
            fragment_spreads: selection_set.direct_fragment_spreads(),
            name: def.name.clone(),
            selection_set,
            source: canonical_source(ast::operation::Definition::Fragment(def.clone())),
            type_condition: type_name.clone(),
        })
    }

    fn compile_fragment_spread(
        &mut self,
        file_path: Option<&Path>,
        ast_spread: &ast::operation::FragmentSpread,
        scope_possible_types: &PossibleTypes,
        visited_fragments: &mut HashSet<String>,
    ) -> Result<Option<FragmentSpreadSelection>> {
        let def_location = loc::SourceLocation::from_pos(file_path, ast_spread.position);
        if !visited_fragments.insert(ast_spread.fragment_name.clone()) {
            log::trace!(
                "Skipping repeated spread of fragment `{}` at {def_location}",
                ast_spread.fragment_name,
            );
            return Ok(None);
        }

        let fragment_id = self.get_fragment(ast_spread.fragment_name.as_str(), &def_location)?;
        let possible_types = self.fragments.resolve(fragment_id)?
            .selection_set
            .possible_types
            .intersection(scope_possible_types);

        let directives = DirectiveAnnotation::from_ast_list(
            self.schema,
            file_path,
            &ast_spread.directives,
        )?;

        Ok(Some(FragmentSpreadSelection {
            def_location,
            directives,
            fragment: fragment_id,
            fragment_name: ast_spread.fragment_name.clone(),
            possible_types,
        }))
    }

    fn compile_inline_fragment(
        &mut self,
        file_path: Option<&Path>,
        ast_inline: &ast::operation::InlineFragment,
        parent_type_name: &str,
        scope_possible_types: &PossibleTypes,
        visited_fragments: &HashSet<String>,
    ) -> Result<InlineFragmentSelection> {
        let schema = self.schema;
        let def_location = loc::SourceLocation::from_pos(file_path, ast_inline.position);

        let (type_condition, type_name, possible_types) = match &ast_inline.type_condition {
            Some(ast::operation::TypeCondition::On(type_name)) => {
                self.check_type_condition(type_name.as_str(), &def_location)?;
                let possible_types = possible_types_for(schema, type_name.as_str())?
                    .intersection(scope_possible_types);
                (Some(type_name.clone()), type_name.as_str(), possible_types)
            },
            None => (None, parent_type_name, scope_possible_types.clone()),
        };

        let directives = DirectiveAnnotation::from_ast_list(
            schema,
            file_path,
            &ast_inline.directives,
        )?;

        // Sibling inline fragments may each spread the same fragment; only
        // the spreads above this point in the path are excluded.
        let mut nested_visited = visited_fragments.clone();
        let selection_set = self.compile_selection_set(
            file_path,
            &ast_inline.selection_set,
            type_name,
            possible_types,
            &mut nested_visited,
        )?;

        Ok(InlineFragmentSelection {
            def_location,
            directives,
            selection_set,
            type_condition,
        })
    }

    fn compile_operation(
        &mut self,
        file_path: Option<&Path>,
        op_def: &'doc ast::operation::OperationDefinition,
    ) -> Result<Operation> {
        use ast::operation::OperationDefinition;

        let schema = self.schema;
        let (kind, position, name, var_defs, ast_directives, ast_sel_set) = match op_def {
            OperationDefinition::Mutation(mutation) => (
                OperationKind::Mutation,
                mutation.position,
                &mutation.name,
                &mutation.variable_definitions,
                &mutation.directives,
                &mutation.selection_set,
            ),
            OperationDefinition::Query(query) => (
                OperationKind::Query,
                query.position,
                &query.name,
                &query.variable_definitions,
                &query.directives,
                &query.selection_set,
            ),
            OperationDefinition::SelectionSet(sel_set) => {
                return Err(StructuralError::UnnamedOperation {
                    location: loc::SourceLocation::from_pos(file_path, sel_set.span.0),
                }.into());
            },
            OperationDefinition::Subscription(subscription) => (
                OperationKind::Subscription,
                subscription.position,
                &subscription.name,
                &subscription.variable_definitions,
                &subscription.directives,
                &subscription.selection_set,
            ),
        };

        let def_location = loc::SourceLocation::from_pos(file_path, position);
        let Some(name) = name else {
            return Err(StructuralError::UnnamedOperation {
                location: def_location,
            }.into());
        };
        log::debug!("Compiling {kind} `{name}`");

        let root_type = schema.root_type_name(kind)
            .ok_or_else(|| SchemaReferenceError::UndefinedRootType {
                location: def_location.clone(),
                operation_kind: kind,
            })?
            .to_string();

        let mut variables = IndexMap::new();
        for var_def in var_defs {
            let variable = self.compile_variable(file_path, var_def)?;
            variables.insert(variable.name.clone(), variable);
        }

        let directives = DirectiveAnnotation::from_ast_list(schema, file_path, ast_directives)?;
        let possible_types = possible_types_for(schema, root_type.as_str())?;
        let selection_set = self.compile_selection_set(
            file_path,
            ast_sel_set,
            root_type.as_str(),
            possible_types,
            &mut HashSet::new(),
        )?;

        Ok(Operation {
            def_location,
            directives,
            file_path: file_path.map(Path::to_path_buf),
            fragment_spreads: selection_set.direct_fragment_spreads(),
            identity: OnceLock::new(),
            kind,
            name: name.clone(),
            root_type,
            selection_set,
            source: canonical_source(ast::operation::Definition::Operation(op_def.clone())),
            variables,
        })
    }

    fn compile_selection_set(
        &mut self,
        file_path: Option<&Path>,
        ast_sel_set: &ast::operation::SelectionSet,
        parent_type_name: &str,
        possible_types: PossibleTypes,
        visited_fragments: &mut HashSet<String>,
    ) -> Result<SelectionSet> {
        let parent_type = lookup_schema_type(self.schema, parent_type_name)?;

        let mut selections = Vec::with_capacity(ast_sel_set.items.len());
        for ast_selection in &ast_sel_set.items {
            match ast_selection {
                ast::operation::Selection::Field(ast_field) =>
                    selections.push(Selection::Field(
                        self.compile_field(file_path, ast_field, parent_type)?,
                    )),

                ast::operation::Selection::FragmentSpread(ast_spread) => {
                    if let Some(spread) = self.compile_fragment_spread(
                        file_path,
                        ast_spread,
                        &possible_types,
                        visited_fragments,
                    )? {
                        selections.push(Selection::FragmentSpread(spread));
                    }
                },

                ast::operation::Selection::InlineFragment(ast_inline) =>
                    selections.push(Selection::InlineFragment(self.compile_inline_fragment(
                        file_path,
                        ast_inline,
                        parent_type_name,
                        &possible_types,
                        visited_fragments,
                    )?)),
            }
        }

        Ok(SelectionSet {
            parent_type: parent_type_name.to_string(),
            possible_types,
            selections,
        })
    }

    fn compile_variable(
        &mut self,
        file_path: Option<&Path>,
        var_def: &ast::operation::VariableDefinition,
    ) -> Result<Variable> {
        let def_location = loc::SourceLocation::from_pos(file_path, var_def.position);
        let type_annotation = TypeAnnotation::from_ast_type(&var_def.var_type);
        let type_name = type_annotation.innermost_type_name();

        if self.schema.lookup_type(type_name).is_none() {
            return Err(SchemaReferenceError::UndefinedType {
                location: def_location,
                type_name: type_name.to_string(),
            }.into());
        }
        self.referenced_types.add(self.schema, type_name)?;

        Ok(Variable {
            def_location,
            default_value: var_def.default_value.as_ref()
                .map(Value::from_ast)
                .transpose()?,
            name: var_def.name.clone(),
            type_annotation,
        })
    }

    fn check_type_condition(
        &mut self,
        type_name: &str,
        location: &loc::SourceLocation,
    ) -> Result<()> {
        let Some(cond_type) = self.schema.lookup_type(type_name) else {
            return Err(SchemaReferenceError::UndefinedType {
                location: location.clone(),
                type_name: type_name.to_string(),
            }.into());
        };

        if !cond_type.is_composite() {
            return Err(StructuralError::NonCompositeTypeCondition {
                location: location.clone(),
                type_name: type_name.to_string(),
            }.into());
        }

        self.referenced_types.add(self.schema, type_name)?;
        Ok(())
    }

    /// Resolve a fragment by name, compiling it on first use.
    fn get_fragment(
        &mut self,
        fragment_name: &str,
        spread_location: &loc::SourceLocation,
    ) -> Result<FragmentId> {
        if let Some(fragment_id) = self.fragments.id_for(fragment_name) {
            log::trace!("Reusing compiled fragment `{fragment_name}`");
            return Ok(fragment_id);
        }

        if self.fragments_in_progress.contains(fragment_name) {
            return Err(StructuralError::FragmentCycle {
                fragment_name: fragment_name.to_string(),
                location: spread_location.clone(),
            }.into());
        }

        let Some(pending) = self.pending_fragments.shift_remove(fragment_name) else {
            return Err(SchemaReferenceError::UndefinedFragment {
                fragment_name: fragment_name.to_string(),
                location: spread_location.clone(),
            }.into());
        };

        self.fragments_in_progress.insert(fragment_name.to_string());
        let fragment = self.compile_fragment(pending)?;
        self.fragments_in_progress.remove(fragment_name);

        Ok(self.fragments.push(fragment))
    }
}

/// The printed form of a single definition, which normalizes whitespace and
/// drops comments.
fn canonical_source(def: ast::operation::Definition) -> String {
    let document = ast::operation::Document {
        definitions: vec![def],
    };
    document.to_string().trim_end().to_string()
}

fn lookup_schema_type<'schema>(
    schema: &'schema Schema,
    type_name: &str,
) -> std::result::Result<&'schema GraphQLType, InternalInvariantError> {
    schema.lookup_type(type_name).ok_or_else(|| InternalInvariantError::TypeMissingFromSchema {
        type_name: type_name.to_string(),
    })
}

fn possible_types_for(
    schema: &Schema,
    type_name: &str,
) -> std::result::Result<PossibleTypes, InternalInvariantError> {
    schema.possible_types(type_name)
        .cloned()
        .ok_or_else(|| InternalInvariantError::NonCompositeParentType {
            type_name: type_name.to_string(),
        })
}
