// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Android vendor SDK via JNI.
//
// Requires the Android NDK and targets `aarch64-linux-android` or
// `armv7-linux-androideabi`. Each trait method invokes the corresponding
// static entry point of the vendor's Java SDK through JNI calls into the
// ART runtime.
//
// ## Architecture notes
//
// The vendor SDK is driven entirely through static methods on its two
// facade classes, so this module holds no Java-side state of its own.
// The `android.content.Context` passed to context-taking entry points is
// the application context from the NDK glue (`ndk-context`); the bridge's
// `HostContext` only gates whether a call is made at all.

#![cfg(target_os = "android")]

use jni::JNIEnv;
use jni::objects::{JObject, JString, JValue};

use serde_json::{Map, Value};

use messwerk_core::error::{MesswerkError, Result};
use messwerk_core::types::{AppIdentity, DeviceType, HostContext, PageMode, SdkCapabilities};

use crate::traits::*;

// ---------------------------------------------------------------------------
// Vendor interface constants
// ---------------------------------------------------------------------------

/// Configuration facade of the vendor SDK.
const CONFIG_CLASS: &str = "com/metricore/sdk/MetricoreConfig";

/// Tracking agent facade of the vendor SDK.
const AGENT_CLASS: &str = "com/metricore/sdk/MetricoreAgent";

/// Entry point present from vendor SDK 8 onwards. Its absence marks a
/// linked build too old to record events with a property map.
const STRUCTURED_EVENT_METHOD: &str = "trackEventWithProperties";
const STRUCTURED_EVENT_SIG: &str = "(Landroid/content/Context;Ljava/lang/String;Ljava/util/Map;)V";

// ---------------------------------------------------------------------------
// JNI bootstrap helpers
// ---------------------------------------------------------------------------

/// Convenience: map any `jni::errors::Error` into `MesswerkError::Vendor`.
fn jni_err(context: &str, e: jni::errors::Error) -> MesswerkError {
    MesswerkError::Vendor(format!("{context}: {e}"))
}

/// Run a JNI closure against an attached env and the application context.
///
/// Calls `ndk_context::android_context()` to retrieve the `JavaVM*` pointer
/// set by `android_main` or `ANativeActivity_onCreate`, then attaches the
/// current thread if it is not already attached. Any pending Java exception
/// is cleared before the error is surfaced, so a failed vendor call can
/// never poison the next one.
fn with_env<T>(
    op: &str,
    f: impl FnOnce(&mut JNIEnv<'_>, &JObject<'_>) -> jni::errors::Result<T>,
) -> Result<T> {
    let ctx = ndk_context::android_context();
    if ctx.context().is_null() {
        return Err(MesswerkError::Vendor(
            "Android context is null: native glue not initialised".into(),
        ));
    }
    // SAFETY: `ctx.vm()` returns the `JavaVM*` set by the NDK glue code.
    // The pointer is guaranteed valid for the lifetime of the process.
    let vm = unsafe { jni::JavaVM::from_raw(ctx.vm().cast()) }
        .map_err(|e| jni_err("obtain JavaVM", e))?;
    let mut guard = vm
        .attach_current_thread()
        .map_err(|e| jni_err("attach JNI thread", e))?;
    // SAFETY: the NDK guarantees this pointer is a valid global jobject for
    // the application context.
    let app_context = unsafe { JObject::from_raw(ctx.context().cast()) };

    let out = f(&mut guard, &app_context).map_err(|e| jni_err(op, e));
    if out.is_err() {
        let _ = guard.exception_clear();
    }
    out
}

/// Marshal a JSON property map into a `java.util.HashMap`.
fn to_java_map<'l>(
    env: &mut JNIEnv<'l>,
    properties: &Map<String, Value>,
) -> jni::errors::Result<JObject<'l>> {
    let map = env.new_object("java/util/HashMap", "()V", &[])?;
    for (key, value) in properties {
        let j_key = env.new_string(key)?;
        let j_value = to_java_object(env, value)?;
        env.call_method(
            &map,
            "put",
            "(Ljava/lang/Object;Ljava/lang/Object;)Ljava/lang/Object;",
            &[JValue::Object(&j_key), JValue::Object(&j_value)],
        )?;
    }
    Ok(map)
}

/// Box a scalar JSON value for the property map.
///
/// The vendor backend only accepts scalar property values; nested arrays
/// and objects are passed through as their JSON text.
fn to_java_object<'l>(env: &mut JNIEnv<'l>, value: &Value) -> jni::errors::Result<JObject<'l>> {
    match value {
        Value::String(s) => Ok(env.new_string(s)?.into()),
        Value::Bool(b) => env
            .call_static_method(
                "java/lang/Boolean",
                "valueOf",
                "(Z)Ljava/lang/Boolean;",
                &[JValue::Bool(*b as u8)],
            )?
            .l(),
        Value::Number(n) if n.is_i64() => env
            .call_static_method(
                "java/lang/Long",
                "valueOf",
                "(J)Ljava/lang/Long;",
                &[JValue::Long(n.as_i64().unwrap_or(0))],
            )?
            .l(),
        Value::Number(n) => env
            .call_static_method(
                "java/lang/Double",
                "valueOf",
                "(D)Ljava/lang/Double;",
                &[JValue::Double(n.as_f64().unwrap_or(0.0))],
            )?
            .l(),
        other => Ok(env.new_string(other.to_string())?.into()),
    }
}

// ---------------------------------------------------------------------------
// SDK struct
// ---------------------------------------------------------------------------

/// Android implementation of the vendor analytics seam.
///
/// All methods go through JNI to call the vendor's Java SDK. The struct is
/// zero-sized; all state lives on the Java side.
pub struct AndroidSdk;

impl AndroidSdk {
    /// Create a new Android SDK handle.
    ///
    /// This does **not** touch JNI — the first JNI call happens lazily when
    /// a trait method is invoked.
    pub fn new() -> Self {
        Self
    }
}

impl Default for AndroidSdk {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyticsSdk for AndroidSdk {
    fn platform_name(&self) -> &str {
        "Android"
    }

    /// OS release string from `android.os.Build.VERSION.RELEASE`.
    fn platform_version(&self) -> String {
        let release = with_env("Build.VERSION.RELEASE", |env, _app| {
            let version = env.find_class("android/os/Build$VERSION")?;
            let field = env
                .get_static_field(version, "RELEASE", "Ljava/lang/String;")?
                .l()?;
            let s: String = env.get_string(&JString::from(field))?.into();
            Ok(s)
        });
        match release {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "could not read OS release");
                "unknown".to_string()
            }
        }
    }

    /// Probe the linked vendor build.
    ///
    /// The structured-event check is a `GetStaticMethodID` presence lookup
    /// on the agent class; a missing method raises a Java exception, which
    /// is cleared and reported as "unsupported" rather than an error.
    fn capabilities(&self) -> Result<SdkCapabilities> {
        with_env("capability probe", |env, _app| {
            let agent = env.find_class(AGENT_CLASS)?;
            let structured_events =
                match env.get_static_method_id(&agent, STRUCTURED_EVENT_METHOD, STRUCTURED_EVENT_SIG)
                {
                    Ok(_) => true,
                    Err(_) => {
                        env.exception_clear()?;
                        false
                    }
                };

            let sdk_version = match env.call_static_method(
                CONFIG_CLASS,
                "sdkVersion",
                "()Ljava/lang/String;",
                &[],
            ) {
                Ok(v) => {
                    let obj = v.l()?;
                    if obj.is_null() {
                        None
                    } else {
                        let s: String = env.get_string(&JString::from(obj))?.into();
                        Some(s)
                    }
                }
                Err(_) => {
                    env.exception_clear()?;
                    None
                }
            };

            Ok(SdkCapabilities {
                structured_events,
                sdk_version,
            })
        })
    }
}

impl SdkLifecycle for AndroidSdk {
    fn pre_init(&self, _ctx: &HostContext, identity: &AppIdentity) -> Result<()> {
        with_env("preInit", |env, app| {
            let key = env.new_string(&identity.app_key)?;
            let channel = env.new_string(&identity.channel)?;
            env.call_static_method(
                CONFIG_CLASS,
                "preInit",
                "(Landroid/content/Context;Ljava/lang/String;Ljava/lang/String;)V",
                &[JValue::Object(app), JValue::Object(&key), JValue::Object(&channel)],
            )?;
            // Pre-init also grants policy consent on this platform.
            env.call_static_method(
                CONFIG_CLASS,
                "submitPolicyGrantResult",
                "(Landroid/content/Context;Z)V",
                &[JValue::Object(app), JValue::Bool(1)],
            )?;
            Ok(())
        })?;
        tracing::info!(app_key = %identity.app_key, channel = %identity.channel, "vendor pre-init complete");
        Ok(())
    }

    fn init(&self, _ctx: &HostContext, identity: &AppIdentity, device: DeviceType) -> Result<()> {
        with_env("init", |env, app| {
            let key = env.new_string(&identity.app_key)?;
            let channel = env.new_string(&identity.channel)?;
            let secret: JObject<'_> = match &identity.push_secret {
                Some(s) => env.new_string(s)?.into(),
                None => JObject::null(),
            };
            env.call_static_method(
                CONFIG_CLASS,
                "init",
                "(Landroid/content/Context;Ljava/lang/String;Ljava/lang/String;ILjava/lang/String;)V",
                &[
                    JValue::Object(app),
                    JValue::Object(&key),
                    JValue::Object(&channel),
                    JValue::Int(device.vendor_code()),
                    JValue::Object(&secret),
                ],
            )?;
            Ok(())
        })
    }

    fn set_log_enabled(&self, enabled: bool) -> Result<()> {
        with_env("setLogEnabled", |env, _app| {
            env.call_static_method(
                CONFIG_CLASS,
                "setLogEnabled",
                "(Z)V",
                &[JValue::Bool(enabled as u8)],
            )?;
            Ok(())
        })
    }

    fn set_wrapper_type(&self, kind: &str, version: &str) -> Result<()> {
        with_env("setWrapperType", |env, _app| {
            let j_kind = env.new_string(kind)?;
            let j_version = env.new_string(version)?;
            env.call_static_method(
                CONFIG_CLASS,
                "setWrapperType",
                "(Ljava/lang/String;Ljava/lang/String;)V",
                &[JValue::Object(&j_kind), JValue::Object(&j_version)],
            )?;
            Ok(())
        })
    }
}

impl EventTracking for AndroidSdk {
    fn record_event(
        &self,
        _ctx: &HostContext,
        name: &str,
        properties: Option<&Map<String, Value>>,
    ) -> Result<()> {
        with_env(STRUCTURED_EVENT_METHOD, |env, app| {
            let j_name = env.new_string(name)?;
            let j_map: JObject<'_> = match properties {
                Some(p) => to_java_map(env, p)?,
                None => JObject::null(),
            };
            env.call_static_method(
                AGENT_CLASS,
                STRUCTURED_EVENT_METHOD,
                STRUCTURED_EVENT_SIG,
                &[JValue::Object(app), JValue::Object(&j_name), JValue::Object(&j_map)],
            )?;
            Ok(())
        })
    }
}

impl PageTracking for AndroidSdk {
    fn set_page_mode(&self, mode: PageMode) -> Result<()> {
        with_env("setPageCollectionMode", |env, _app| {
            env.call_static_method(
                AGENT_CLASS,
                "setPageCollectionMode",
                "(I)V",
                &[JValue::Int(mode.vendor_code())],
            )?;
            Ok(())
        })
    }

    fn page_start(&self, name: &str) -> Result<()> {
        with_env("pageStart", |env, _app| {
            let j_name = env.new_string(name)?;
            env.call_static_method(
                AGENT_CLASS,
                "pageStart",
                "(Ljava/lang/String;)V",
                &[JValue::Object(&j_name)],
            )?;
            Ok(())
        })
    }

    fn page_end(&self, name: &str) -> Result<()> {
        with_env("pageEnd", |env, _app| {
            let j_name = env.new_string(name)?;
            env.call_static_method(
                AGENT_CLASS,
                "pageEnd",
                "(Ljava/lang/String;)V",
                &[JValue::Object(&j_name)],
            )?;
            Ok(())
        })
    }
}

impl UserIdentity for AndroidSdk {
    fn profile_sign_in(&self, user_id: &str) -> Result<()> {
        with_env("profileSignIn", |env, _app| {
            let j_user = env.new_string(user_id)?;
            env.call_static_method(
                AGENT_CLASS,
                "profileSignIn",
                "(Ljava/lang/String;)V",
                &[JValue::Object(&j_user)],
            )?;
            Ok(())
        })
    }

    fn profile_sign_off(&self) -> Result<()> {
        with_env("profileSignOff", |env, _app| {
            env.call_static_method(AGENT_CLASS, "profileSignOff", "()V", &[])?;
            Ok(())
        })
    }
}

impl ErrorReporting for AndroidSdk {
    fn report_error(&self, _ctx: &HostContext, description: &str) -> Result<()> {
        with_env("reportError", |env, app| {
            let j_desc = env.new_string(description)?;
            env.call_static_method(
                AGENT_CLASS,
                "reportError",
                "(Landroid/content/Context;Ljava/lang/String;)V",
                &[JValue::Object(app), JValue::Object(&j_desc)],
            )?;
            Ok(())
        })
    }
}
