//! Controller-level interceptor markers.
//!
//! A host web framework keeps one [`ControllerRegistry`] and asks it, per
//! request, whether the handling controller opted out of the fields interceptor.

use std::any::{type_name, TypeId};
use std::collections::HashMap;

/// Marker stored for controllers that disable the fields interceptor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisableFieldsInterceptorOnControllerOptions;

/// Controller type → interceptor marker.
#[derive(Debug, Default)]
pub struct ControllerRegistry {
    disabled_fields: HashMap<TypeId, (&'static str, DisableFieldsInterceptorOnControllerOptions)>,
}

impl ControllerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark controller `C` so the fields interceptor skips its routes.
    pub fn disable_fields_interceptor<C: 'static>(&mut self) -> &mut Self {
        self.disabled_fields.insert(
            TypeId::of::<C>(),
            (type_name::<C>(), DisableFieldsInterceptorOnControllerOptions),
        );
        self
    }

    pub fn is_fields_interceptor_disabled<C: 'static>(&self) -> bool {
        self.is_fields_interceptor_disabled_for(TypeId::of::<C>())
    }

    /// Lookup by `TypeId`, for pipelines that only carry the id of the controller.
    pub fn is_fields_interceptor_disabled_for(&self, controller: TypeId) -> bool {
        self.fields_interceptor_options(controller).is_some()
    }

    pub fn fields_interceptor_options(
        &self,
        controller: TypeId,
    ) -> Option<DisableFieldsInterceptorOnControllerOptions> {
        self.disabled_fields.get(&controller).map(|(_, options)| *options)
    }

    /// Names of all controllers that disabled the fields interceptor.
    pub fn controllers_without_fields_interceptor(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.disabled_fields.values().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names
    }
}
