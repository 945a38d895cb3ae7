use crate::ast;
use crate::types::ListTypeAnnotation;
use crate::types::NamedTypeAnnotation;

/// Represents the annotated type for a [`Field`](crate::types::Field),
/// [`Variable`](crate::operation::Variable), or
/// [`Parameter`](crate::types::Parameter).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    pub(crate) fn from_ast_type(ast_type: &ast::Type) -> Self {
        Self::from_ast_type_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(ast_type: &ast::Type, nullable: bool) -> Self {
        match ast_type {
            ast::Type::ListType(inner) =>
                Self::List(ListTypeAnnotation {
                    inner_type: Box::new(Self::from_ast_type_impl(inner, true)),
                    nullable,
                }),

            ast::Type::NamedType(name) =>
                Self::Named(NamedTypeAnnotation {
                    nullable,
                    type_name: name.to_string(),
                }),

            ast::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(inner, false),
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            Self::List(ListTypeAnnotation { inner_type, .. })
                => inner_type.innermost_named_type_annotation(),
            Self::Named(named_annot)
                => named_annot,
        }
    }

    /// Shorthand for the name of the
    /// [innermost named type](Self::innermost_named_type_annotation).
    pub fn innermost_type_name(&self) -> &str {
        self.innermost_named_type_annotation().type_name()
    }

    pub fn is_nullable(&self) -> bool {
        match self {
            Self::List(annot) => annot.is_nullable(),
            Self::Named(annot) => annot.is_nullable(),
        }
    }

    pub fn to_graphql_string(&self) -> String {
        match self {
            Self::List(list_annot) => list_annot.to_graphql_string(),
            Self::Named(named_annot) => named_annot.to_graphql_string(),
        }
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_graphql_string().as_str())
    }
}
