/// Define free functions returning the global signals, so call sites read
/// `tracker_state().get()` instead of threading `globals()` everywhere.
///
/// `global_signals! { pub fn_name => field: Type, ... }`
#[macro_export]
macro_rules! global_signals {
    ( $( $vis:vis $name:ident => $field:ident : $ty:ty ),+ $(,)? ) => {
        $(
            $vis fn $name() -> ::leptos::RwSignal<$ty> {
                $crate::global_state::globals().$field
            }
        )+
    };
}
